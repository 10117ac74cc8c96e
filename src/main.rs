use ragpress::config::EnvSnapshot;
use ragpress::pipeline;
use ragpress::types::PipelineError;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<(), PipelineError> {
    init_tracing();

    let snapshot = EnvSnapshot::capture();
    let summary = pipeline::run(&snapshot).await?;

    println!(
        "Wrote {} chunks across {} documents.",
        summary.chunks, summary.documents
    );
    Ok(())
}

fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let subscriber = FmtSubscriber::builder().with_env_filter("info").finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
