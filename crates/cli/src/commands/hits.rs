use std::sync::Arc;

use anyhow::Result;
use hit_counter_service::HitService;

use crate::connect_storage;

pub(crate) async fn run(session_id: &str, history: bool) -> Result<()> {
    let service = HitService::new(Arc::new(connect_storage().await?));

    if history {
        let records = service.session_history(session_id).await?;
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        let hits = service.current_hits(session_id).await?;
        println!("{hits}");
    }
    Ok(())
}
