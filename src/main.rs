use anyhow::Result;
use dados_seeder::{Config, InsertError, RecordInserter};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "dados_seeder=info")
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    println!("dados-seeder {}", env!("CARGO_PKG_VERSION"));

    let inserter = RecordInserter::new(Config::from_env());

    match inserter.run().await {
        Ok(record) => {
            println!(
                "Novo registro criado com sucesso (AlunoID {}, token {})",
                record.id, record.name
            );
        }
        // Connection failures end the run right away with the driver message.
        Err(err @ InsertError::Connection(_)) => return Err(err.into()),
        // Prepare/execute failures are reported; the connection has already
        // been closed by this point.
        Err(err) => {
            println!("Erro: {err}");
        }
    }

    Ok(())
}
