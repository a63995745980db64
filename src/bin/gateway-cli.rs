use clap::{Parser, Subcommand};
use serde_json::json;

#[derive(Parser)]
#[command(name = "gateway-cli")]
#[command(about = "Management CLI for the API Gateway", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    gateway: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a service base URL under a logical name
    Register {
        /// Logical service name
        application: String,
        /// Backend base URL, e.g. http://127.0.0.1:9000
        url: String,
    },
    /// Issue a GET through the gateway to {service}/{endpoint}
    Call {
        service: String,
        endpoint: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Register { application, url } => {
            let res = client
                .post(format!("{}/registry", cli.gateway))
                .json(&json!({ "application": application, "url": url }))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Call { service, endpoint } => {
            let res = client
                .get(format!("{}/{}/{}", cli.gateway, service, endpoint))
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let body = res.text().await?;
    if status.is_success() {
        println!("{}", body);
    } else {
        eprintln!("Error: gateway returned status {}", status);
        if !body.is_empty() {
            eprintln!("{}", body);
        }
    }
    Ok(())
}
