//! schoolsite-render
//!
//! Renders one route of the site from a content directory and prints the
//! content region's markup.
//!
//! ```bash
//! schoolsite-render --content-dir site '#/news-detail/2'
//! schoolsite-render --content-dir site --pages pages.toml -v '#/vision'
//! ```

#[cfg(not(target_arch = "wasm32"))]
mod cli {
	use std::path::PathBuf;
	use std::process;

	use clap::Parser;

	use schoolsite::core::logging;
	use schoolsite::render::{RenderRequest, render};

	#[derive(Parser)]
	#[command(name = "schoolsite-render")]
	#[command(about = "Render one route of the school site to stdout", long_about = None)]
	#[command(version)]
	struct Cli {
		/// Directory containing the site's documents and data files
		#[arg(short, long, value_name = "DIR", default_value = "site")]
		content_dir: PathBuf,

		/// Site settings (TOML)
		#[arg(short, long, value_name = "FILE")]
		settings: Option<PathBuf>,

		/// Page table (TOML); the built-in table when omitted
		#[arg(short, long, value_name = "FILE")]
		pages: Option<PathBuf>,

		/// Verbosity level (can be repeated)
		#[arg(short, long, action = clap::ArgAction::Count)]
		verbosity: u8,

		/// Route to render, e.g. `#/news-detail/2`; the default page when omitted
		#[arg(value_name = "FRAGMENT", default_value = "")]
		fragment: String,
	}

	fn level(verbosity: u8) -> &'static str {
		match verbosity {
			0 => "warn",
			1 => "info",
			2 => "debug",
			_ => "trace",
		}
	}

	#[tokio::main(flavor = "current_thread")]
	pub async fn main() {
		let cli = Cli::parse();
		logging::init(level(cli.verbosity));

		let request = RenderRequest {
			content_dir: cli.content_dir,
			fragment: cli.fragment,
			settings: cli.settings,
			pages: cli.pages,
		};

		match render(&request).await {
			Ok(html) => println!("{}", html),
			Err(e) => {
				eprintln!("Error: {}", e);
				process::exit(1);
			}
		}
	}
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
	cli::main();
}

#[cfg(target_arch = "wasm32")]
fn main() {}
