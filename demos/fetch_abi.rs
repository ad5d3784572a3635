use etherscan_http::{EtherscanClient, FetchOptions};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let address = std::env::var("CONTRACT_ADDRESS")?;

    let explorer = EtherscanClient::from_env()
        .map_err(anyhow::Error::msg)?
        .with_options(FetchOptions {
            timeout_ms: 10_000,
            max_retries: 3,
            backoff_ms: 3_000,
        });

    let abi = explorer.save_abi(&address, "contractABI.json").await?;

    let items = abi.as_array().map(Vec::len).unwrap_or(0);
    println!("ABI for {address} has {items} items");
    println!("ABI has been written to contractABI.json");

    Ok(())
}
