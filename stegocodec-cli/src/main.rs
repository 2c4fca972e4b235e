//! Command-line front-end for the stegocodec web service.
//!
//! Usage:
//!   stegocodec login
//!   stegocodec hide --image photo.jpg --message "Secret" --password pw --output out.png
//!   stegocodec extract --image out.png --password pw
//!
//! The activation key comes from `--key` or the `STEGOCODEC_API_KEY`
//! environment variable; without one the service runs in demo mode.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use stegocodec_client::{convert_size, CodecClient, CodecResponse, LicenseType};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "stegocodec")]
#[command(about = "Hide and recover password-encrypted messages in images")]
struct Args {
    /// Activation key (defaults to $STEGOCODEC_API_KEY, empty for demo mode)
    #[arg(short, long)]
    key: Option<String>,

    /// Override the web API endpoint URL
    #[arg(long)]
    endpoint: Option<String>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show license status and the current operating limits
    Login,
    /// Encrypt a message and hide it inside an image file
    Hide {
        /// Source image (PNG, JPG, GIF, BMP, WBMP, GD2, AVIF or WEBP)
        #[arg(short, long)]
        image: PathBuf,
        /// Message to encrypt and hide
        #[arg(short, long)]
        message: String,
        /// Encryption password
        #[arg(short, long)]
        password: String,
        /// Output PNG path, overwrites an existing file
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Recover the hidden message from an encoded PNG
    Extract {
        /// Encoded PNG previously produced by `hide`
        #[arg(short, long)]
        image: PathBuf,
        /// Decryption password
        #[arg(short, long)]
        password: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::WARN };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let key = args
        .key
        .or_else(|| std::env::var("STEGOCODEC_API_KEY").ok())
        .filter(|key| !key.is_empty());
    let mut client = match key {
        Some(key) => CodecClient::with_key(key),
        None => CodecClient::new(),
    };
    if let Some(endpoint) = args.endpoint {
        client = client.with_endpoint(endpoint);
    }

    match args.command {
        Command::Login => {
            let result = client.login().await?;
            print_license(&result);
        }
        Command::Hide {
            image,
            message,
            password,
            output,
        } => {
            client.encode(image, &message, &password, &output).await?;
            println!(
                "Secret message encoded and saved to {}",
                output.display()
            );
        }
        Command::Extract { image, password } => {
            let result = client.decode(image, &password).await?;
            println!("{}", result.message.unwrap_or_default());
        }
    }

    Ok(())
}

fn print_license(result: &CodecResponse) {
    let version = if result.is_demo() { "demo" } else { "full" };
    println!("You are running in {version} version");

    if let Some(license) = result
        .license
        .as_ref()
        .filter(|license| license.activation_status)
    {
        let license_type = match license.license_type {
            LicenseType::Personal => "personal",
            LicenseType::Company => "company",
        };
        println!("Registered to           - {}", license.user_name);
        println!("License type            - {license_type}");
        println!("Total usage credits     - {}", license.usages_total);
        println!("Remaining usage credits - {}", license.usages_count);
    }

    if let Some(limits) = &result.limits {
        println!("Max. password length    - {}", limits.max_password_len);
        match limits.message_limit() {
            Some(len) => println!("Max. message length     - {len}"),
            None => println!("Max. message length     - unlimited"),
        }
        println!(
            "Max. input file size    - {}",
            convert_size(limits.max_file_size)
        );
    }
}
