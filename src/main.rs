//! `urlkit` command line: inspect and edit URLs and query strings.

use anyhow::{self as ah, Context as _};
use clap::{Args, Parser, Subcommand};
use log::debug;
use urlkit::{ParsedUrl, QueryString, UrlComponentType, UrlOptions};

#[derive(Parser, Debug)]
#[command(name = "urlkit", version, about = "Inspect and edit URLs and query strings")]
struct Opts {
    /// Enable debug logging (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every component and derived property of a URL.
    Inspect {
        #[command(flatten)]
        url: UrlArgs,

        /// Print only this component (scheme, domain, port, filename, root_domain, ...).
        #[arg(short, long)]
        component: Option<UrlComponentType>,
    },

    /// Apply edits to a URL and print the result.
    Edit {
        #[command(flatten)]
        url: UrlArgs,

        /// Replace the scheme.
        #[arg(long)]
        scheme: Option<String>,

        /// Replace the host, keeping any port.
        #[arg(long)]
        domain: Option<String>,

        /// Replace the path.
        #[arg(long)]
        path: Option<String>,

        /// Replace the whole query string (not validated).
        #[arg(long)]
        query: Option<String>,

        /// Replace the fragment.
        #[arg(long)]
        fragment: Option<String>,

        /// Set a query parameter, `key=value`. Repeatable.
        #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        set_params: Vec<(String, String)>,

        /// Remove a query parameter. Repeatable.
        #[arg(long = "del", value_name = "KEY")]
        del_params: Vec<String>,
    },

    /// Parse a query string and print its pairs.
    Query {
        /// Query string, with or without the leading '?'.
        query: String,
    },
}

#[derive(Args, Debug)]
struct UrlArgs {
    /// URL, absolute or relative.
    url: String,

    /// Authority used when the URL has none.
    #[arg(long)]
    default_authority: Option<String>,

    /// Scheme used when the URL has none and an authority is known.
    #[arg(long)]
    default_scheme: Option<String>,

    /// Leave `#...` in the path or query instead of splitting off a fragment.
    #[arg(long)]
    no_fragment: bool,
}

impl UrlArgs {
    fn options(&self) -> UrlOptions {
        let mut options = UrlOptions::new().keep_fragment(!self.no_fragment);
        if let Some(authority) = &self.default_authority {
            options = options.with_default_authority(authority);
        }
        if let Some(scheme) = &self.default_scheme {
            options = options.with_default_scheme(scheme);
        }
        options
    }

    fn parse(&self) -> ah::Result<ParsedUrl> {
        let options = self.options();
        debug!("parsing {} with {:?}", self.url, options);
        ParsedUrl::with_options(&self.url, &options).context("Parse url")
    }
}

fn parse_key_value(arg: &str) -> Result<(String, String), String> {
    arg.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got: {}", arg))
}

fn command_inspect(url: &ParsedUrl, component: Option<UrlComponentType>) {
    match component {
        Some(kind) => println!("{}", url.component(kind).unwrap_or_default()),
        None => {
            println!("url: {}", url);
            for kind in UrlComponentType::ALL {
                println!("{}: {}", kind, url.component(kind).unwrap_or_default());
            }
            println!(
                "registrable_domain: {}",
                url.registrable_domain().unwrap_or_default()
            );
            for (key, value) in &url.query_string() {
                println!("param {}: {}", key, value);
            }
        }
    }
}

fn command_query(raw: &str) {
    let qs = QueryString::new(raw);
    for (key, value) in &qs {
        println!("{}: {}", key, value);
    }
    println!("{}", qs);
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn main() -> ah::Result<()> {
    let opts = Opts::parse();
    init_logging(opts.verbose);

    match opts.command {
        Command::Inspect { url, component } => {
            command_inspect(&url.parse()?, component);
        }
        Command::Edit {
            url,
            scheme,
            domain,
            path,
            query,
            fragment,
            set_params,
            del_params,
        } => {
            let mut parsed = url.parse()?;
            if let Some(scheme) = scheme {
                parsed.set_scheme(scheme);
            }
            if let Some(domain) = domain {
                parsed.set_domain(&domain);
            }
            if let Some(path) = path {
                parsed.set_path(path);
            }
            if let Some(fragment) = fragment {
                parsed.set_fragment(fragment);
            }
            if let Some(query) = query {
                parsed.set_query(query);
            }
            for (key, value) in &set_params {
                parsed.set_param(key, value);
            }
            for key in &del_params {
                parsed.del_param(key);
            }
            println!("{}", parsed);
        }
        Command::Query { query } => command_query(&query),
    }
    Ok(())
}
