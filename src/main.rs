use clap::{Parser, Subcommand};
use quranweb::{config, generate, output};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "quranweb")]
#[command(about = "Static site generator for Quran translation and tafsir pages")]
#[command(long_about = "\
Static site generator for Quran translation and tafsir pages

Reads one JSON file per surah from a quran-json corpus and writes a fully
linked static site: a page per surah, a page per ayah with its tafsir, a
home index, an about page, robots.txt and sitemap.xml.

Corpus structure:

  quran-json/
  └── surah/
      ├── 1.json                   # {\"1\": {name, name_latin, text, translations, tafsir}}
      ├── 2.json
      └── ...

Template directory:

  templates/
  ├── header-layout.html           # {{TITLE}}, {{META}}
  ├── menu-layout.html
  ├── footer-layout.html
  ├── surah-layout.html            # {{EACH_AYAH}}
  ├── tafsir-layout.html           # {{EACH_TAFSIR}}
  ├── index-layout.html            # {{SURAH_INDEX}}
  └── about-layout.html

Settings come from quranweb.toml, then flags, then environment variables
(flags win). Run 'quranweb gen-config' to print a documented config.")]
#[command(version)]
struct Cli {
    /// Config file (skipped if it does not exist)
    #[arg(long, default_value = "quranweb.toml", global = true)]
    config: PathBuf,

    #[command(flatten)]
    site: SiteArgs,

    /// Log every page written
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// Per-key overrides of the config file.
#[derive(clap::Args)]
struct SiteArgs {
    /// quran-json corpus directory
    #[arg(long, env = "QURAN_JSON_DIR", global = true)]
    corpus_dir: Option<PathBuf>,

    /// Output directory
    #[arg(long, env = "QURANWEB_OUTPUT_DIR", global = true)]
    output_dir: Option<PathBuf>,

    /// Layout template directory
    #[arg(long, env = "QURANWEB_TEMPLATE_DIR", global = true)]
    template_dir: Option<PathBuf>,

    /// Static assets copied into the output root
    #[arg(long, env = "QURANWEB_ASSETS_DIR", global = true)]
    assets_dir: Option<PathBuf>,

    /// Absolute site URL
    #[arg(long, env = "QURANWEB_BASE_URL", global = true)]
    base_url: Option<String>,

    /// Translation and tafsir language
    #[arg(long, env = "QURANWEB_LANG_ID", global = true)]
    lang_id: Option<String>,

    /// First surah to render
    #[arg(long, env = "QURANWEB_BEGIN_SURAH", global = true)]
    begin: Option<u16>,

    /// Last surah to render
    #[arg(long, env = "QURANWEB_END_SURAH", global = true)]
    end: Option<u16>,

    #[arg(long, env = "QURANWEB_APP_NAME", global = true)]
    app_name: Option<String>,

    #[arg(long, env = "QURANWEB_ANALYTICS_ID", global = true)]
    analytics_id: Option<String>,

    #[arg(long, env = "QURANWEB_OG_IMAGE_URL", global = true)]
    og_image_url: Option<String>,

    #[arg(long, env = "QURANWEB_PROJECT_URL", global = true)]
    project_url: Option<String>,

    /// Base URL of the murottal audio files
    #[arg(long, env = "QURANWEB_AUDIO_BASE_URL", global = true)]
    audio_base_url: Option<String>,
}

impl SiteArgs {
    /// The supplied values as a config layer.
    fn overrides(&self) -> toml::Table {
        let mut table = toml::Table::new();
        let paths = [
            ("corpus_dir", &self.corpus_dir),
            ("output_dir", &self.output_dir),
            ("template_dir", &self.template_dir),
            ("assets_dir", &self.assets_dir),
        ];
        for (key, value) in paths {
            if let Some(path) = value {
                table.insert(key.into(), path_value(path));
            }
        }
        let strings = [
            ("base_url", &self.base_url),
            ("lang_id", &self.lang_id),
            ("app_name", &self.app_name),
            ("analytics_id", &self.analytics_id),
            ("og_image_url", &self.og_image_url),
            ("project_url", &self.project_url),
            ("audio_base_url", &self.audio_base_url),
        ];
        for (key, value) in strings {
            if let Some(value) = value {
                table.insert(key.into(), toml::Value::String(value.clone()));
            }
        }
        for (key, value) in [("begin_chapter", self.begin), ("end_chapter", self.end)] {
            if let Some(n) = value {
                table.insert(key.into(), toml::Value::Integer(i64::from(n)));
            }
        }
        table
    }
}

fn path_value(path: &Path) -> toml::Value {
    toml::Value::String(path.to_string_lossy().into_owned())
}

#[derive(Subcommand)]
enum Command {
    /// Render the whole site
    Build,
    /// Validate config, templates and every surah in range without writing
    Check,
    /// Print a stock quranweb.toml with all options documented
    GenConfig,
}

impl Command {
    fn label(&self) -> &'static str {
        match self {
            Command::Build => "Build",
            Command::Check => "Check",
            Command::GenConfig => "Config",
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("==> {} failed: {e}", cli.command.label());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Build => {
            let site = config::load_config(&cli.config, cli.site.overrides())?;
            output::print_site_summary(&site);

            println!(
                "==> Generating HTML \u{2192} {}",
                site.output_dir.display()
            );
            let build_date = chrono::Local::now().date_naive();
            let report = generate::generate(&site, build_date)?;
            output::print_build_output(&report);

            println!("==> Build complete: {}", report.output_dir.display());
        }
        Command::Check => {
            let site = config::load_config(&cli.config, cli.site.overrides())?;
            println!("==> Checking {}", site.corpus_dir.display());
            let chapters = generate::check(&site)?;
            output::print_check_output(&chapters);
            println!("==> Corpus is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
