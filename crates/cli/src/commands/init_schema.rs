use anyhow::Result;

use crate::connect_storage;

pub(crate) async fn run() -> Result<()> {
    let storage = connect_storage().await?;
    storage.ensure_schema().await?;
    println!("Schema ready");
    Ok(())
}
