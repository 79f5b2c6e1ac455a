//! Unit tests for discrete-argument command construction and source discovery

use spritebuild_core::command::CompileCommand;
use spritebuild_core::config::BuildConfig;
use spritebuild_core::layout::ProjectLayout;
use spritebuild_core::platform::Platform;
use spritebuild_core::sources;

use std::path::PathBuf;

/// Create a scratch directory under the system temp dir, unique per test.
fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("spritebuild_{}_{}", tag, std::process::id()));
    std::fs::create_dir_all(&dir).expect("scratch dir should be creatable");
    dir
}

#[test]
fn test_argv_preserves_field_order() {
    let config = BuildConfig::for_platform(&Platform::Linux);
    let files = vec![
        PathBuf::from("../editorSrc/Sprite.cpp"),
        PathBuf::from("../editorSrc/main.cpp"),
    ];

    let command = CompileCommand::from_config(&config, &files);

    assert_eq!(command.program, "clang++");
    let expected: Vec<&str> = vec![
        "-std=c++17",
        "-g",
        "-D",
        "LINUX",
        "-o",
        "spriteEditor",
        "-I",
        "../editorInclude/",
        "../lib/",
        "../editorInclude/SDL2",
        "../editorSrc/Sprite.cpp",
        "../editorSrc/main.cpp",
        "-lSDL2",
        "-lSDL2_ttf",
        "-lSDL2_mixer",
        "-ldl",
    ];
    assert_eq!(command.args, expected);
}

#[test]
fn test_paths_with_spaces_stay_single_arguments() {
    let config = BuildConfig::for_platform(&Platform::Linux);
    let files = vec![PathBuf::from("../editor src/two words.cpp")];

    let command = CompileCommand::from_config(&config, &files);

    assert!(
        command
            .args
            .contains(&"../editor src/two words.cpp".to_string()),
        "the path must survive as one argument"
    );
}

#[test]
fn test_expand_matches_cpp_files_sorted() {
    let dir = scratch_dir("expand");
    for name in ["main.cpp", "Sprite.cpp", "ResourceManager.cpp"] {
        std::fs::write(dir.join(name), "// test source")
            .expect("source file should be writable");
    }
    std::fs::write(dir.join("README.md"), "docs").expect("file should be writable");
    std::fs::create_dir_all(dir.join("nested.cpp")).expect("dir should be creatable");

    let pattern = format!("{}/*.cpp", dir.display());
    let files = sources::expand(&pattern).expect("expansion should succeed");

    let names: Vec<String> = files
        .iter()
        .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    // Sorted, .cpp files only, and the directory named like a source is skipped
    assert_eq!(names, vec!["ResourceManager.cpp", "Sprite.cpp", "main.cpp"]);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_expand_with_no_match_is_an_error() {
    let dir = scratch_dir("empty");
    std::fs::write(dir.join("notes.txt"), "").expect("file should be writable");

    let pattern = format!("{}/*.cpp", dir.display());
    let result = sources::expand(&pattern);
    assert!(result.is_err(), "empty match must be reported, not ignored");

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_expand_missing_directory_is_an_error() {
    let pattern = format!(
        "{}/does-not-exist/*.cpp",
        std::env::temp_dir().join("spritebuild_missing").display()
    );
    assert!(sources::expand(&pattern).is_err());
}

#[test]
fn test_layout_overrides_reach_the_command() {
    let layout = ProjectLayout {
        sources: "engine/*.cpp".to_string(),
        executable: "editor".to_string(),
        compiler: Some("g++ -std=c++20".to_string()),
    };
    let config = BuildConfig::with_layout(&Platform::Linux, &layout);

    let rendered = config.command_line();
    assert!(rendered.starts_with("g++ -std=c++20 "));
    assert!(rendered.contains(" -o editor  "));
    assert!(rendered.contains(" engine/*.cpp "));

    let command = CompileCommand::from_config(&config, &[PathBuf::from("engine/a.cpp")]);
    assert_eq!(command.program, "g++");
    assert!(command.args.contains(&"engine/a.cpp".to_string()));
}
