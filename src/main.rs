use std::io::{BufRead, Write};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use imagechat::{
    ChatSession, Commands, Container, ContainerConfig, EncodeImageUseCase, FsImageFile,
    ProxyClient, StagedImage,
};

#[derive(Parser)]
#[command(name = "imagechat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Serve {
            host,
            port,
            mock_completion,
        } => {
            let container = Arc::new(Container::new(ContainerConfig {
                base_url: None,
                mock_completion,
            }));
            let addr: SocketAddr = format!("{host}:{port}").parse()?;
            imagechat::serve(container, addr).await
        }

        Commands::Chat { server_url, image } => run_chat(server_url, image).await,

        Commands::Analyze { image, server_url } => {
            let staged = stage_image(&image)?;
            let client = ProxyClient::new(server_url);
            let analysis = client.analyze(&staged).await?;
            println!("{analysis}");
            Ok(())
        }
    }
}

fn stage_image(path: &Path) -> Result<StagedImage> {
    let source = FsImageFile::open(path)?;
    Ok(EncodeImageUseCase::new().execute(&source)?)
}

/// Line-oriented chat session. Sends are sequential: a new message is only
/// accepted once the previous request's token has been released.
async fn run_chat(server_url: String, image: Option<PathBuf>) -> Result<()> {
    let client = ProxyClient::new(server_url);
    let mut session = ChatSession::new();

    if let Some(path) = image {
        session.stage_image(stage_image(&path)?);
        println!("Staged image: {}", path.display());
    }

    println!("Type a message, or /attach <path>, /detach, /quit.");

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        if line.is_empty() {
            continue;
        }
        if line == "/quit" || line == "/exit" {
            break;
        }
        if let Some(path) = line.strip_prefix("/attach ") {
            match stage_image(Path::new(path.trim())) {
                Ok(staged) => {
                    session.stage_image(staged);
                    println!("Image staged.");
                }
                Err(e) => println!("{e}"),
            }
            continue;
        }
        if line == "/detach" {
            if session.clear_image().is_some() {
                println!("Image removed.");
            } else {
                println!("No image staged.");
            }
            continue;
        }

        let token = match session.begin_request(line) {
            Ok(token) => token,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match client.chat(session.conversation(), session.staged_image()).await {
            Ok(reply) => {
                println!("{reply}");
                session.complete_request(token, reply)?;
            }
            Err(e) => {
                println!("{e}");
                session.fail_request(token)?;
            }
        }
    }

    Ok(())
}
