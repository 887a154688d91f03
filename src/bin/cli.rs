use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use tasknote_auth::TokenService;
use tasknote_config::JwtConfig;
use tasknote_core::{UserId, hash_password};

#[derive(Parser)]
#[command(name = "tasknote-cli")]
#[command(about = "Tasknote CLI - Administrative tools for Tasknote", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the stored digest of a password
    HashPassword {
        /// Password to hash
        secret: String,
    },
    /// Issue an access token signed with the configured JWT_SECRET
    IssueToken {
        /// Account the token authenticates
        #[arg(short = 'u', long)]
        user_id: i64,
    },
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::HashPassword { secret } => {
            println!("{}", hash_password(&secret));
        }
        Commands::IssueToken { user_id } => {
            let tokens = TokenService::new(&JwtConfig::from_env());
            let token = tokens
                .issue(UserId::new(user_id))
                .map_err(|e| anyhow::anyhow!("{}", e.error))?;
            println!("{}", token);
            eprintln!("Valid for {} seconds", tokens.access_token_expiry());
        }
    }

    Ok(())
}
