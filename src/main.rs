use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
mod passphrase;
use telecrypt::{CipherStrategy, Cryptor, Envelope, Sealed, crypto::nonce};
use tracing_subscriber::EnvFilter;

#[derive(Debug, clap::Args)]
struct SchemeArgs {
    /// Cipher generation: gcm (default) or the legacy cbc
    #[arg(long, value_name = "SCHEME", env = "TELECRYPT_SCHEME", default_value_t = CipherStrategy::Gcm)]
    scheme: CipherStrategy,
}

#[derive(Debug, Parser)]
#[command(name = "telecrypt")]
#[command(
    version,
    about = "Encrypts and decrypts telemetry payloads for constrained devices."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Prints a fresh random nonce (gcm) or IV (cbc) as hex
    Nonce {
        #[command(flatten)]
        scheme: SchemeArgs,
    },

    /// Encrypts a payload under a fresh nonce and prints the JSON envelope
    #[command(arg_required_else_help = true)]
    Seal {
        #[command(flatten)]
        scheme: SchemeArgs,
        plaintext: String,
    },

    /// Decrypts a JSON envelope and prints the payload
    #[command(arg_required_else_help = true)]
    Open {
        #[command(flatten)]
        scheme: SchemeArgs,
        envelope: String,
    },

    /// Encrypts a payload under an explicit hex nonce
    #[command(arg_required_else_help = true)]
    Encrypt {
        #[command(flatten)]
        scheme: SchemeArgs,
        /// Hex nonce (24 chars for gcm) or IV (32 chars for cbc)
        #[arg(long)]
        nonce: String,
        plaintext: String,
    },

    /// Decrypts hex wire fields and prints the payload
    #[command(arg_required_else_help = true)]
    Decrypt {
        #[command(flatten)]
        scheme: SchemeArgs,
        /// Hex nonce (gcm) or IV (cbc)
        #[arg(long)]
        nonce: String,
        /// Hex authentication tag, required for gcm
        #[arg(long)]
        tag: Option<String>,
        ciphertext: String,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn cryptor(scheme: CipherStrategy) -> Result<Cryptor> {
    let passphrase = passphrase::read_passphrase()?;
    Ok(Cryptor::new(passphrase.as_bytes(), scheme))
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_logging(args.verbose);

    match args.command {
        Commands::Nonce { scheme } => {
            let nonce = nonce::generate_hex(scheme.scheme.nonce_kind())?;
            println!("{nonce}");
        }
        Commands::Seal { scheme, plaintext } => {
            let envelope = cryptor(scheme.scheme)?
                .seal(plaintext.as_bytes())
                .context("failed to seal payload")?;
            println!("{}", envelope.to_json()?);
        }
        Commands::Open { scheme, envelope } => {
            let envelope = Envelope::from_json(&envelope)?;
            let plaintext = cryptor(scheme.scheme)?.open_str(&envelope)?;
            println!("{plaintext}");
        }
        Commands::Encrypt {
            scheme,
            nonce,
            plaintext,
        } => {
            let sealed = cryptor(scheme.scheme)?
                .encrypt_str(&plaintext, &nonce)
                .context("failed to encrypt payload")?;
            println!("{}", Envelope::from_sealed(scheme.scheme, sealed)?.to_json()?);
        }
        Commands::Decrypt {
            scheme,
            nonce,
            tag,
            ciphertext,
        } => {
            let sealed = Sealed {
                nonce,
                ciphertext,
                tag,
            };
            let plaintext = cryptor(scheme.scheme)?.decrypt_str(&sealed)?;
            println!("{plaintext}");
        }
    }

    Ok(())
}
