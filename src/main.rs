#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Thoth Namer CLI shell: drives one registry instance against a sled
//! store. A stand-in for the host engine's dispatcher, useful for local
//! inspection and testing.

use anyhow::{anyhow, Context, Result};
use std::time::{SystemTime, UNIX_EPOCH};
use thoth_namer::core::context::{CallContext, TransferAction};
use thoth_namer::core::contract::NamerContract;
use thoth_namer::core::state::persistent::PersistentStore;
use thoth_namer::core::types::{Address, Amount, NamerConfig, TokenUid};
use tracing::info;

fn env(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn usage() -> ! {
    eprintln!(
        "usage: thoth-namer <command> [args]\n\
         commands:\n\
         \x20 init <domain> <fee>\n\
         \x20 register <name> <deposit-amount>\n\
         \x20 resolve <name>\n\
         \x20 owner <name>\n\
         \x20 exists <name>\n\
         \x20 set-owner <name> <new-owner-b58>\n\
         \x20 set-resolving <name> <address-b58>\n\
         \x20 set-fee <fee>\n\
         \x20 set-dev <address-b58>\n\
         \x20 info\n\
         \x20 root\n\
         environment: THOTH_CONFIG (toml), THOTH_DATA_DIR, THOTH_CALLER (b58)"
    );
    std::process::exit(2);
}

fn load_config() -> Result<NamerConfig> {
    let path = std::env::var("THOTH_CONFIG").ok();
    if let Some(path) = path {
        let raw = std::fs::read_to_string(&path).with_context(|| format!("read {path}"))?;
        return toml::from_str(&raw).with_context(|| format!("parse {path}"));
    }
    Ok(NamerConfig {
        instance: thoth_namer::core::types::InstanceSettings {
            name: env("THOTH_INSTANCE", "thoth-namer"),
            data_dir: env("THOTH_DATA_DIR", "./data"),
        },
        chain: thoth_namer::core::types::ChainSettings {
            registration_token_hex: env("THOTH_TOKEN", ""),
        },
    })
}

fn caller() -> Result<Address> {
    let b58 = std::env::var("THOTH_CALLER")
        .map_err(|_| anyhow!("THOTH_CALLER must be set for mutation commands"))?;
    Address::from_base58(&b58).map_err(|e| anyhow!("THOTH_CALLER: {e}"))
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

fn parse_amount(s: &str) -> Result<Amount> {
    s.parse::<Amount>().with_context(|| format!("bad amount {s:?}"))
}

fn parse_address(s: &str) -> Result<Address> {
    Address::from_base58(s).map_err(|e| anyhow!("bad address {s:?}: {e}"))
}

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .compact()
        .try_init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        usage();
    }

    let cfg = load_config()?;
    let token: TokenUid = cfg
        .chain
        .registration_token()
        .map_err(|e| anyhow!("registration token: {e}"))?;
    let store = PersistentStore::open(&cfg.instance.data_dir)
        .map_err(|e| anyhow!("open store at {}: {e}", cfg.instance.data_dir))?;
    let contract = NamerContract::new(store, token.clone());

    info!(instance = %cfg.instance.name, data_dir = %cfg.instance.data_dir, "thoth-namer starting");

    let cmd = args[0].as_str();
    let rest = &args[1..];
    match (cmd, rest) {
        ("init", [domain, fee]) => {
            let ctx = CallContext::plain(caller()?, now_secs());
            contract.initialize(&ctx, domain, parse_amount(fee)?)?;
            println!("initialized domain {domain}");
        }
        ("register", [name, amount]) => {
            let ctx = CallContext::new(
                caller()?,
                vec![TransferAction::deposit(token, parse_amount(amount)?)],
                now_secs(),
            );
            contract.create_name(&ctx, name)?;
            println!("registered {name}");
        }
        ("resolve", [name]) => println!("{}", contract.resolve_name(name)?),
        ("owner", [name]) => println!("{}", contract.get_name_owner(name)?),
        ("exists", [name]) => println!("{}", contract.check_name_existence(name)?),
        ("set-owner", [name, new_owner]) => {
            let ctx = CallContext::plain(caller()?, now_secs());
            contract.change_name_owner(&ctx, name, parse_address(new_owner)?)?;
            println!("owner of {name} updated");
        }
        ("set-resolving", [name, addr]) => {
            let ctx = CallContext::plain(caller()?, now_secs());
            contract.change_resolving_address(&ctx, name, parse_address(addr)?)?;
            println!("resolving address of {name} updated");
        }
        ("set-fee", [fee]) => {
            let ctx = CallContext::plain(caller()?, now_secs());
            contract.change_fee(&ctx, parse_amount(fee)?)?;
            println!("fee updated");
        }
        ("set-dev", [addr]) => {
            let ctx = CallContext::plain(caller()?, now_secs());
            contract.change_dev_address(&ctx, parse_address(addr)?)?;
            println!("dev address updated");
        }
        ("info", []) => {
            let (domain, fee, total_fee, dev) = contract.info()?;
            println!("domain:    {domain}");
            println!("fee:       {fee}");
            println!("total_fee: {total_fee}");
            println!("dev:       {dev}");
        }
        ("root", []) => println!("{}", hex::encode(contract.state_root()?)),
        _ => usage(),
    }
    Ok(())
}
