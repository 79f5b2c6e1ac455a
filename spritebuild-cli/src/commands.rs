// CLI command handlers
use anyhow::{Context, Result};
use std::path::Path;

use spritebuild_core::command::CompileCommand;
use spritebuild_core::config::BuildConfig;
use spritebuild_core::error::BuildError;
use spritebuild_core::layout::ProjectLayout;
use spritebuild_core::platform::Platform;
use spritebuild_core::{runner, sources, toolchain};

/// Compile the editor. The toolchain and sources are preflighted before the
/// banner is printed and the compiler is launched.
pub fn build_editor(platform_override: Option<&str>, manifest: Option<&Path>) -> Result<()> {
    let platform = resolve_platform(platform_override);
    if !platform.is_supported() {
        // The fallback configuration has no include or library flags, so a
        // compile on an unrecognized platform cannot succeed. Refuse up front.
        return Err(BuildError::unsupported_platform(platform.name()).into());
    }

    let layout = load_layout(manifest)?;
    let config = BuildConfig::with_layout(&platform, &layout);

    let compiler_path = toolchain::locate(&config.compiler)?;
    log::debug!("Using compiler at {}", compiler_path.display());

    let files = sources::expand(&config.sources)?;
    log::info!("Compiling {} source files", files.len());

    print_banner(&platform, &config);

    let command = CompileCommand::from_config(&config, &files);
    runner::run(&command)?;

    println!("Build complete: {}", config.executable);
    Ok(())
}

/// Assemble and print the compile command without running anything.
///
/// Unrecognized platforms are allowed here: the degraded command is exactly
/// what a build would have attempted, which is worth being able to inspect.
pub fn show_command(platform_override: Option<&str>, manifest: Option<&Path>) -> Result<()> {
    let platform = resolve_platform(platform_override);
    if !platform.is_supported() {
        log::warn!(
            "No configuration branch for platform {}; printing the degraded command",
            platform
        );
    }

    let layout = load_layout(manifest)?;
    let config = BuildConfig::with_layout(&platform, &layout);
    println!("{}", config.command_line());
    Ok(())
}

/// Report what a build would use: platform, compiler resolution and version,
/// matching source count, and the output name.
pub fn check_toolchain(platform_override: Option<&str>, manifest: Option<&Path>) -> Result<()> {
    let platform = resolve_platform(platform_override);
    let layout = load_layout(manifest)?;
    let config = BuildConfig::with_layout(&platform, &layout);

    println!("Platform: {}", platform);
    if !platform.is_supported() {
        println!("  no configuration branch exists; builds are refused on this platform");
    }

    match toolchain::locate(&config.compiler) {
        Ok(path) => {
            println!("Compiler: {} ({})", config.compiler, path.display());
            if let Some(version) = toolchain::probe_version(&config.compiler) {
                println!("  {}", version);
            }
        }
        Err(err) => println!("Compiler: {}", err),
    }

    match sources::expand(&config.sources) {
        Ok(files) => println!("Sources:  {} files match {}", files.len(), config.sources),
        Err(err) => println!("Sources:  {}", err),
    }

    println!("Output:   {}", config.executable);
    Ok(())
}

fn resolve_platform(platform_override: Option<&str>) -> Platform {
    match platform_override {
        Some(name) => Platform::from_name(name),
        None => Platform::host(),
    }
}

fn load_layout(manifest: Option<&Path>) -> Result<ProjectLayout> {
    match manifest {
        Some(path) => ProjectLayout::from_file(path)
            .with_context(|| format!("Failed to load layout file: {}", path.display())),
        None => ProjectLayout::load_or_default().context("Failed to load project layout"),
    }
}

/// Print the pre-build banner: a frame, the platform line, and the
/// shell-typeable command itself.
fn print_banner(platform: &Platform, config: &BuildConfig) {
    println!("============v (Command running on terminal) v===========================");
    println!("Compiling debug version (-g) on: {}", platform);
    println!("{}", config.command_line());
    println!("========================================================================");
}
