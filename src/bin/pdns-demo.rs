use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use pdns_client::{ClientConfig, PowerDnsClient, Record, ResourceRecordSet};
use serde::Serialize;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, rename_all = "kebab-case")]
struct Cli {
    /// PowerDNS server URL (any path is ignored)
    #[arg(long, value_name = "URL", default_value = "http://127.0.0.1:8081")]
    server_url: String,
    /// PowerDNS API key
    #[arg(long, value_name = "KEY")]
    api_key: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all zones
    Zones,
    /// List the records of a zone, optionally filtered by name and type
    Records {
        zone: String,
        #[arg(long, requires = "rtype")]
        name: Option<String>,
        #[arg(long = "type", requires = "name")]
        rtype: Option<String>,
    },
    /// List the record sets of a zone
    Rrsets { zone: String },
    /// Check whether a record id (<name>:::<type>) exists
    Exists { zone: String, id: String },
    /// Create a record, replacing the set at its name and type
    Create {
        zone: String,
        name: String,
        #[arg(value_name = "TYPE")]
        rtype: String,
        content: String,
        #[arg(long, default_value_t = 3600)]
        ttl: u32,
        #[arg(long)]
        disabled: bool,
    },
    /// Replace a whole record set (repeat --content for multiple records)
    Replace {
        zone: String,
        name: String,
        #[arg(value_name = "TYPE")]
        rtype: String,
        #[arg(long, default_value_t = 3600)]
        ttl: u32,
        #[arg(long = "content", value_name = "CONTENT", required = true)]
        contents: Vec<String>,
    },
    /// Delete the record set identified by <name>:::<type>
    Delete { zone: String, id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = ClientConfig::new(&cli.server_url, &cli.api_key);
    let client = PowerDnsClient::from_config(&config)
        .await
        .with_context(|| format!("failed to connect to {}", cli.server_url))?;

    info!(version = %client.api_version(), "connected to {}", cli.server_url);

    run(&client, cli.command).await
}

async fn run(client: &PowerDnsClient, command: Command) -> Result<()> {
    match command {
        Command::Zones => {
            let zones = client.list_zones().await.context("failed to list zones")?;
            print_json(&zones)
        }
        Command::Records { zone, name, rtype } => {
            let records = match (name, rtype) {
                (Some(name), Some(rtype)) => {
                    client
                        .list_records_by_name_and_type(&zone, &name, &rtype)
                        .await
                }
                (None, None) => client.list_records(&zone).await,
                _ => bail!("--name and --type must be given together"),
            }
            .with_context(|| format!("failed to list records of {zone}"))?;
            print_json(&records)
        }
        Command::Rrsets { zone } => {
            let rrsets = client
                .list_records_as_rrset(&zone)
                .await
                .with_context(|| format!("failed to list record sets of {zone}"))?;
            print_json(&rrsets)
        }
        Command::Exists { zone, id } => {
            let exists = client.record_exists_by_id(&zone, &id).await?;
            print_json(&serde_json::json!({ "id": id, "exists": exists }))
        }
        Command::Create {
            zone,
            name,
            rtype,
            content,
            ttl,
            disabled,
        } => {
            let record = Record {
                disabled,
                ..Record::new(name, rtype, content, ttl)
            };
            let id = client.create_record(&zone, &record).await?;
            print_json(&serde_json::json!({ "ok": true, "id": id }))
        }
        Command::Replace {
            zone,
            name,
            rtype,
            ttl,
            contents,
        } => {
            let rrset = contents
                .into_iter()
                .fold(ResourceRecordSet::new(name, rtype, ttl), |set, c| set.with_record(c));
            let id = client.replace_record_set(&zone, rrset).await?;
            print_json(&serde_json::json!({ "ok": true, "id": id }))
        }
        Command::Delete { zone, id } => {
            client.delete_record_set_by_id(&zone, &id).await?;
            print_json(&serde_json::json!({ "ok": true, "id": id }))
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
