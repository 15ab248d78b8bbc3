use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use meraki_bssid_export::api::types::{Device, Organization};
use meraki_bssid_export::api::{DEFAULT_BASE_URL, MerakiClient};
use meraki_bssid_export::{ExportError, Result, collect, config, export, prompt};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_tracing()?;

    let api_key = match config::resolve_api_key(cli.api_key) {
        Some(key) => key,
        None => prompt::read_required("Meraki API key")?,
    };
    let client = MerakiClient::new(&cli.base_url, &api_key)?;

    match cli
        .command
        .unwrap_or_else(|| Command::Export(ExportArgs::default()))
    {
        Command::Export(args) => execute_export(&client, args),
        Command::Orgs => execute_orgs(&client),
        Command::Networks { org_id } => execute_networks(&client, org_id),
        Command::Devices { org_id, name } => execute_devices(&client, org_id, name),
    }
}

fn execute_export(client: &MerakiClient, args: ExportArgs) -> Result<()> {
    let org_id = resolve_org_id(client, args.org_id)?;
    let name_filter = match args.name {
        Some(name) => name,
        None => prompt::read_line("Device name filter (blank for all)")?,
    };
    let devices = client.devices(&org_id, Some(&name_filter))?;
    let access_points = collect::filter_access_points(devices);
    println!("Found {} access points.", access_points.len());
    print_device_table(&access_points);

    let rows = collect::collect_rows(client, &access_points, |done, total| {
        let pct = done * 100 / total;
        print!("\rQuerying radio status {done}/{total} ({pct}%)");
        let _ = std::io::stdout().flush();
    })?;
    if !access_points.is_empty() {
        println!();
    }

    let output_dir = args.output_dir.unwrap_or_else(config::default_output_dir);
    let path = export::export_report(&rows, &output_dir)?;
    println!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

fn execute_orgs(client: &MerakiClient) -> Result<()> {
    let organizations = client.organizations()?;
    for org in &organizations {
        println!("{:<24} {}", org.id, org.name);
    }
    Ok(())
}

fn execute_networks(client: &MerakiClient, org_id: Option<String>) -> Result<()> {
    let org_id = resolve_org_id(client, org_id)?;
    let networks = client.networks(&org_id)?;
    for network in &networks {
        println!("{:<24} {}", network.id, network.name);
    }
    Ok(())
}

fn execute_devices(
    client: &MerakiClient,
    org_id: Option<String>,
    name: Option<String>,
) -> Result<()> {
    let org_id = resolve_org_id(client, org_id)?;
    let devices = client.devices(&org_id, name.as_deref())?;
    print_device_table(&devices);
    Ok(())
}

/// Settles on an organization: the flag wins, a single visible organization
/// is taken silently, and anything more gets a numbered prompt.
fn resolve_org_id(client: &MerakiClient, flag: Option<String>) -> Result<String> {
    if let Some(org_id) = flag {
        return Ok(org_id);
    }
    let organizations = client.organizations()?;
    match organizations.len() {
        0 => Err(ExportError::NoOrganizations),
        1 => {
            println!(
                "Using organization {} ({})",
                organizations[0].name, organizations[0].id
            );
            Ok(organizations[0].id.clone())
        }
        _ => {
            println!("Select an organization:");
            let org = prompt::choose(&organizations, "Organization number", |org: &Organization| {
                format!("{} ({})", org.name, org.id)
            })?;
            Ok(org.id.clone())
        }
    }
}

fn print_device_table(devices: &[Device]) {
    if devices.is_empty() {
        return;
    }
    println!(
        "{:<28} {:<10} {:<18} {:<16} {}",
        "Name", "Model", "MAC", "Serial", "Firmware"
    );
    for device in devices {
        println!(
            "{:<28} {:<10} {:<18} {:<16} {}",
            device.name_or_blank(),
            device.model,
            device.mac,
            device.serial,
            device.firmware
        );
    }
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .try_init()
        .map_err(|error| ExportError::Logging(error.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Export Meraki access point BSSIDs to an Excel report for Teams location provisioning."
)]
struct Cli {
    /// Dashboard API key. Falls back to MERAKI_API_KEY, then to a prompt.
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Dashboard endpoint, mostly overridden when testing against a mock.
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Collect every access point's BSSIDs and write the Excel report.
    Export(ExportArgs),

    /// List the organizations visible to the API key.
    Orgs,

    /// List the networks in one organization.
    Networks {
        /// Organization to list; prompts when omitted.
        #[arg(long)]
        org_id: Option<String>,
    },

    /// List one organization's device inventory.
    Devices {
        /// Organization to list; prompts when omitted.
        #[arg(long)]
        org_id: Option<String>,

        /// Keep only devices whose name contains this text, matched by the
        /// dashboard.
        #[arg(long)]
        name: Option<String>,
    },
}

#[derive(clap::Args, Default)]
struct ExportArgs {
    /// Organization to export; prompts when omitted and several are visible.
    #[arg(long)]
    org_id: Option<String>,

    /// Keep only devices whose name contains this text, matched by the
    /// dashboard. Prompts when omitted; a blank answer keeps everything.
    #[arg(long)]
    name: Option<String>,

    /// Directory the report lands in; defaults to the documents folder.
    #[arg(long)]
    output_dir: Option<PathBuf>,
}
