use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use protocol::pad::UNKNOWN_VERSION;
use protocol::{NoticeKind, Operation, PadState, RequestState};
use surface::encode::{self, EncodeError};
use symbolpad::client::{ClassifierClient, ClientError};
use symbolpad::config::ClientConfig;
use symbolpad::script::{ScriptError, StrokeScript};
use symbolpad::session::{Session, SessionError};
use tokio::io::AsyncReadExt;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("cannot read {path}: {source}")]
    Read { path: String, source: std::io::Error },
    #[error("cannot write {path}: {source}")]
    Write { path: String, source: std::io::Error },
    #[error(transparent)]
    Script(#[from] ScriptError),
    #[error("cannot encode drawing: {0}")]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("{0}")]
    Failed(&'static str),
}

#[derive(Parser, Debug)]
#[command(name = "symbolpad", about = "Draw, classify, and label handwritten math symbols")]
struct Cli {
    /// Classification service base URL.
    #[arg(long, global = true, env = "SYMBOLPAD_API_URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rasterize a stroke script to a PNG file.
    Render {
        #[arg(long, help = "Stroke script path, or - for stdin")]
        strokes: String,
        #[arg(long)]
        out: PathBuf,
    },
    /// Ask the service which symbol a drawing shows.
    Classify(ImageSource),
    /// Store a drawing under a symbol for training.
    Save {
        #[command(flatten)]
        source: ImageSource,
        #[arg(long)]
        symbol: String,
    },
    /// Retrain the model from saved drawings.
    Retrain,
    /// Print the current model version.
    Version,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct ImageSource {
    #[arg(long, help = "Stroke script path, or - for stdin")]
    strokes: Option<String>,
    #[arg(long, help = "PNG file sent as-is")]
    image: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let mut config = ClientConfig::from_env();
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url);
    }

    match cli.command {
        Command::Render { strokes, out } => run_render(&strokes, &out).await,
        Command::Classify(source) => run_classify(&config, source).await,
        Command::Save { source, symbol } => run_save(&config, source, &symbol).await,
        Command::Retrain => run_retrain(&config).await,
        Command::Version => run_version(&config).await,
    }
}

async fn run_render(strokes: &str, out: &Path) -> Result<(), CliError> {
    let script = load_script(strokes).await?;
    let png = script.render().export_png()?;
    tokio::fs::write(out, &png)
        .await
        .map_err(|source| CliError::Write { path: out.display().to_string(), source })?;
    tracing::info!(path = %out.display(), bytes = png.len(), "wrote drawing");
    Ok(())
}

async fn run_classify(config: &ClientConfig, source: ImageSource) -> Result<(), CliError> {
    let client = ClassifierClient::new(config)?;
    let label = match source {
        ImageSource { image: Some(path), .. } => {
            let image = load_png(&path).await?;
            client.classify(&image).await.map_err(|e| failed(Operation::Classify, &e))?
        }
        ImageSource { strokes, .. } => {
            let mut session = drawn_session(client, strokes.as_deref().unwrap_or("-")).await?;
            session.proceed().await?;
            finished(session.pad())?;
            session.pad().prediction.clone().unwrap_or_default()
        }
    };
    println!("{label}");
    Ok(())
}

async fn run_save(config: &ClientConfig, source: ImageSource, symbol: &str) -> Result<(), CliError> {
    let client = ClassifierClient::new(config)?;
    match source {
        ImageSource { image: Some(path), .. } => {
            let image = load_png(&path).await?;
            client.save(&image, symbol).await.map_err(|e| failed(Operation::Save, &e))?;
            if let Some(notice) = Operation::Save.success_notice() {
                println!("{notice}");
            }
        }
        ImageSource { strokes, .. } => {
            let mut session = drawn_session(client, strokes.as_deref().unwrap_or("-")).await?;
            session.select_symbol(symbol);
            session.save_correction().await?;
            report(session.pad())?;
        }
    }
    Ok(())
}

async fn run_retrain(config: &ClientConfig) -> Result<(), CliError> {
    let mut session = Session::new(ClassifierClient::new(config)?);
    session.retrain().await?;
    report(session.pad())?;
    if let Some(version) = &session.pad().model_version {
        println!("version {version}");
    }
    Ok(())
}

async fn run_version(config: &ClientConfig) -> Result<(), CliError> {
    let mut session = Session::new(ClassifierClient::new(config)?);
    session.refresh_version().await?;
    match session.pad().model_version.as_deref() {
        Some(UNKNOWN_VERSION) | None => Err(CliError::Failed(Operation::Version.failure_notice())),
        Some(version) => {
            println!("{version}");
            Ok(())
        }
    }
}

/// A session whose surface holds the replayed script.
async fn drawn_session(client: ClassifierClient, strokes: &str) -> Result<Session, CliError> {
    let script = load_script(strokes).await?;
    let mut session = Session::with_surface(script.new_surface(), client);
    session.replay(&script);
    Ok(session)
}

/// Error out if the last request failed.
fn finished(pad: &PadState) -> Result<(), CliError> {
    match pad.request {
        RequestState::Failed(op) => Err(CliError::Failed(op.failure_notice())),
        _ => Ok(()),
    }
}

/// Print the success notice, or error out with the failure notice.
fn report(pad: &PadState) -> Result<(), CliError> {
    finished(pad)?;
    if let Some(notice) = pad.notice.as_ref().filter(|n| n.kind == NoticeKind::Info) {
        println!("{}", notice.text);
    }
    Ok(())
}

fn failed(op: Operation, error: &ClientError) -> CliError {
    tracing::warn!(error = %error, operation = %op, "service call failed");
    CliError::Failed(op.failure_notice())
}

async fn load_script(path: &str) -> Result<StrokeScript, CliError> {
    let text = if path == "-" {
        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .map_err(|source| CliError::Read { path: "stdin".to_owned(), source })?;
        text
    } else {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CliError::Read { path: path.to_owned(), source })?
    };
    Ok(StrokeScript::from_json(&text)?)
}

async fn load_png(path: &Path) -> Result<String, CliError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| CliError::Read { path: path.display().to_string(), source })?;
    Ok(encode::base64_payload(&bytes))
}
