//! Build Configuration
//!
//! This module provides the immutable per-platform build configuration and
//! its rendering as a command string. Selection is a total function: every
//! recognized platform has exactly one branch, and unrecognized platforms
//! get a named fallback rather than partially populated values.

use serde::{Deserialize, Serialize};

use crate::layout::ProjectLayout;
use crate::platform::Platform;

/// Compiler invocation used on every platform that does not override it.
pub const DEFAULT_COMPILER: &str = "clang++ -std=c++17";
/// Compiler invocation used on Windows, where MinGW g++ is the likelier install.
pub const WINDOWS_COMPILER: &str = "g++ -std=c++17";
/// Wildcard path naming every source file of the editor.
pub const DEFAULT_SOURCES: &str = "../editorSrc/*.cpp";
/// Output executable name before platform adjustments.
pub const DEFAULT_EXECUTABLE: &str = "spriteEditor";

/// Build configuration for one platform.
///
/// Constructed once per invocation from the platform probe, consumed once to
/// build a command, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Compiler executable plus language-standard flag
    pub compiler: String,
    /// Preprocessor defines and debug flags
    pub arguments: String,
    /// Include-path flags
    pub include_dirs: String,
    /// Wildcard path for the source files
    pub sources: String,
    /// Output executable name
    pub executable: String,
    /// Library-link flags
    pub libraries: String,
}

impl BuildConfig {
    /// Select the configuration for a platform with the default layout.
    pub fn for_platform(platform: &Platform) -> Self {
        Self::with_layout(platform, &ProjectLayout::default())
    }

    /// Select the configuration for a platform, applying layout overrides.
    ///
    /// The layout supplies the source wildcard, the output name and an
    /// optional compiler override; everything platform-specific comes from
    /// the branch below. On Windows the output name gets an `.exe` suffix.
    pub fn with_layout(platform: &Platform, layout: &ProjectLayout) -> Self {
        let compiler = |platform_default: &str| -> String {
            layout
                .compiler
                .clone()
                .unwrap_or_else(|| platform_default.to_string())
        };
        let sources = layout.sources.clone();
        let executable = layout.executable.clone();

        match platform {
            Platform::Linux => Self {
                compiler: compiler(DEFAULT_COMPILER),
                arguments: "-g -D LINUX".to_string(),
                include_dirs: "-I ../editorInclude/ ../lib/ ../editorInclude/SDL2".to_string(),
                sources,
                executable,
                libraries: "-lSDL2 -lSDL2_ttf -lSDL2_mixer -ldl".to_string(),
            },
            Platform::MacOs => Self {
                compiler: compiler(DEFAULT_COMPILER),
                arguments: "-g -D MAC".to_string(),
                include_dirs:
                    "-I../editorInclude/ -I../editorInclude/SDL2 -I/Library/Frameworks/SDL2.framework/Headers"
                        .to_string(),
                sources,
                executable,
                libraries: "-F/Library/Frameworks -framework SDL2".to_string(),
            },
            Platform::Windows => Self {
                compiler: compiler(WINDOWS_COMPILER),
                arguments: "-g -D MINGW -std=c++17 -static-libgcc -static-libstdc++".to_string(),
                include_dirs: "-L../lib -I../editorInclude/ -I../editorInclude/SDL2".to_string(),
                sources,
                executable: format!("{}.exe", executable),
                libraries: "-lmingw32 -lSDL2main -lSDL2 -lSDL2_ttf -lSDL2_image -lSDL2_mixer"
                    .to_string(),
            },
            Platform::Other(_) => {
                Self::fallback_with(compiler(DEFAULT_COMPILER), sources, executable)
            }
        }
    }

    /// Configuration used when no platform branch matches.
    ///
    /// Keeps the default compiler, sources and output name; every
    /// platform-specific field is empty. The rendered command is then
    /// syntactically malformed, which `show` reports as-is and `build`
    /// refuses to run.
    pub fn fallback() -> Self {
        Self::fallback_with(
            DEFAULT_COMPILER.to_string(),
            DEFAULT_SOURCES.to_string(),
            DEFAULT_EXECUTABLE.to_string(),
        )
    }

    fn fallback_with(compiler: String, sources: String, executable: String) -> Self {
        Self {
            compiler,
            arguments: String::new(),
            include_dirs: String::new(),
            sources,
            executable,
            libraries: String::new(),
        }
    }

    /// Render the shell-typeable command string.
    ///
    /// Field order and spacing are stable output: compiler, arguments, `-o`
    /// and the output name, a double space, then includes, sources and
    /// libraries. Empty fields keep their separators.
    pub fn command_line(&self) -> String {
        format!(
            "{} {} -o {}  {} {} {}",
            self.compiler,
            self.arguments,
            self.executable,
            self.include_dirs,
            self.sources,
            self.libraries
        )
    }
}
