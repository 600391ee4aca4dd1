use clap::{App, Arg};
use log::warn;
use rafall::build::Generator;
use rafall::config::DEFAULT_PATH;
use rafall::markdown;
use rafall::metadata::Metadata;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Serialize)]
struct Post<'a> {
    #[serde(flatten)]
    metadata: &'a Metadata,

    #[serde(rename = "Body")]
    body: String,
}

fn main() {
    let env = env_logger::Env::default().default_filter_or("info");
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .init();

    let matches = App::new("rafall")
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("conf")
                .short("c")
                .long("conf")
                .takes_value(true)
                .default_value(DEFAULT_PATH)
                .help("config file (in json format)"),
        )
        .arg(
            Arg::with_name("source")
                .short("s")
                .long("source")
                .takes_value(true)
                .default_value("src")
                .help("directory containing the post source files"),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .help("print the collected posts as JSON"),
        )
        .get_matches();

    if let Err(e) = run(
        Path::new(matches.value_of("conf").unwrap_or(DEFAULT_PATH)),
        Path::new(matches.value_of("source").unwrap_or("src")),
        matches.is_present("json"),
    ) {
        report(&mut std::io::stderr(), &e);
        std::process::exit(1);
    }
}

// Fatal errors go straight to stderr so they show up whatever the log
// filter is.
fn report<W: Write>(w: &mut W, e: &anyhow::Error) {
    let _ = writeln!(w, "rafall: {:#}", e);
}

fn run(
    config_path: &Path,
    source_directory: &Path,
    json: bool,
) -> anyhow::Result<()> {
    let generator = Generator::new(config_path)?;
    let posts = generator.collect_files(source_directory)?;

    let mut rendered = Vec::with_capacity(posts.len());
    for (metadata, content) in &posts {
        match markdown::to_html(content) {
            Ok(body) => rendered.push(Post { metadata, body }),
            Err(e) => warn!("Skipping {:?}: {}", metadata.title, e),
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&rendered)?);
    } else {
        for post in &rendered {
            println!(
                "{}  {}  [{}]",
                post.metadata.date,
                post.metadata.title,
                post.metadata.tags.join(", ")
            );
        }
    }
    Ok(())
}
