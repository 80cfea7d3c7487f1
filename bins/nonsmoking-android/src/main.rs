//! NonSmoking Android CLI
//!
//! Inspects the packaging configuration the external Android build will
//! consume: signing overrides from `key.properties`, application
//! metadata, release variant behavior, and declared dependencies.

use anyhow::Result;
use clap::{Parser, Subcommand};
use nonsmoking_cli::output::{format_enabled, print_field, print_optional_field, redact, Status};
use nonsmoking_core::error::exit_codes;
use nonsmoking_packaging::{verify_release, BuildConfiguration, Severity};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nonsmoking-android")]
#[command(about = "Packaging configuration tools for the NonSmoking Android app")]
#[command(version)]
struct Cli {
    /// Android project root containing key.properties
    #[arg(short, long, global = true, default_value = ".")]
    project_root: PathBuf,

    /// Increase output verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the full evaluated configuration
    Evaluate {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the resolved signing profile
    Signing {
        /// Output as JSON (includes secrets verbatim)
        #[arg(long)]
        json: bool,
    },

    /// Show the fixed application metadata
    Describe {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List declared dependency coordinates
    Deps {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check release readiness (signing data present, keystore exists)
    Doctor {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        owo_colors::set_override(false);
    }

    if cli.verbose > 0 {
        tracing_subscriber::fmt()
            .with_env_filter("nonsmoking_core=debug,nonsmoking_packaging=debug")
            .init();
    }

    let config = match BuildConfiguration::evaluate(&cli.project_root) {
        Ok(config) => config,
        Err(e) => {
            Status::error(&format!("Failed to evaluate configuration: {}", e));
            std::process::exit(exit_codes::CONFIG_ERROR);
        }
    };

    let exit_code = match cli.command {
        Commands::Evaluate { json } => run_evaluate(&config, json),
        Commands::Signing { json } => run_signing(&config, json),
        Commands::Describe { json } => run_describe(&config, json),
        Commands::Deps { json } => run_deps(&config, json),
        Commands::Doctor { json } => run_doctor(&config, json),
    };

    std::process::exit(exit_code);
}

fn print_json<T: serde::Serialize>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            exit_codes::SUCCESS
        }
        Err(e) => {
            Status::error(&format!("JSON encoding failed: {}", e));
            exit_codes::FAILURE
        }
    }
}

fn run_evaluate(config: &BuildConfiguration, json: bool) -> i32 {
    if json {
        return print_json(config);
    }

    run_describe(config, false);

    Status::header("Toolchain");
    print_field("compile SDK", &config.toolchain.compile_sdk.to_string());
    print_field("NDK", &config.toolchain.ndk_version);

    Status::header("Release variant");
    print_field("signing config", &config.release.signing_config);
    print_field("minify", format_enabled(config.release.minify_enabled));
    print_field("shrink resources", format_enabled(config.release.shrink_resources));
    print_field("proguard files", &config.release.proguard_files.join(", "));

    Status::header("Compile options");
    print_field("source compat", &config.compile_options.source_compatibility);
    print_field("target compat", &config.compile_options.target_compatibility);
    print_field("kotlin jvm target", &config.compile_options.kotlin_jvm_target);
    print_field(
        "desugaring",
        format_enabled(config.compile_options.core_library_desugaring),
    );

    run_signing(config, false);
    run_deps(config, false);

    exit_codes::SUCCESS
}

fn run_signing(config: &BuildConfiguration, json: bool) -> i32 {
    if json {
        return print_json(&config.signing);
    }

    Status::header("Signing profile");
    let signing = &config.signing;
    print_optional_field("key alias", signing.key_alias.as_deref());
    print_optional_field(
        "key password",
        redact(signing.key_password.as_deref()).as_deref(),
    );
    print_optional_field(
        "store file",
        signing
            .store_file
            .as_deref()
            .map(|p| p.display().to_string())
            .as_deref(),
    );
    print_optional_field(
        "store password",
        redact(signing.store_password.as_deref()).as_deref(),
    );

    if !signing.is_complete() {
        Status::warning("Signing profile incomplete; release builds will fail to sign");
    }

    exit_codes::SUCCESS
}

fn run_describe(config: &BuildConfiguration, json: bool) -> i32 {
    if json {
        return print_json(&config.application);
    }

    Status::header("Application");
    let app = &config.application;
    print_field("namespace", &app.namespace);
    print_field("application id", &app.application_id);
    print_field("min SDK", &app.min_sdk.to_string());
    print_field("target SDK", &app.target_sdk.to_string());
    print_field("compile SDK", &app.compile_sdk.to_string());
    print_field("version code", &app.version_code.to_string());
    print_field("version name", &app.version_name);

    exit_codes::SUCCESS
}

fn run_deps(config: &BuildConfiguration, json: bool) -> i32 {
    if json {
        return print_json(&config.dependencies);
    }

    Status::header("Dependencies");
    for dep in &config.dependencies {
        print_field(&dep.scope.to_string(), &dep.coordinate());
    }

    exit_codes::SUCCESS
}

fn run_doctor(config: &BuildConfiguration, json: bool) -> i32 {
    let report = verify_release(config);

    if json {
        let code = print_json(&report);
        if code != exit_codes::SUCCESS {
            return code;
        }
        return if report.is_ready() {
            exit_codes::SUCCESS
        } else {
            exit_codes::FAILURE
        };
    }

    Status::header("Release readiness");
    for finding in &report.findings {
        match finding.severity {
            Severity::Error => Status::error(&finding.message),
            Severity::Warning => Status::warning(&finding.message),
        }
    }

    if report.is_ready() {
        Status::success("Ready for a signed release build");
        exit_codes::SUCCESS
    } else {
        Status::error("Not ready: fix the findings above and re-run");
        exit_codes::FAILURE
    }
}
