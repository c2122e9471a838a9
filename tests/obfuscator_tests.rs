use std::fs;
use std::path::PathBuf;

use php_obfuscator::config::ObfuscationConfig;
use php_obfuscator::digest::digest;
use php_obfuscator::obfuscator::Obfuscator;
use php_obfuscator::rename::{CLASS_PREFIX, FUNCTION_PREFIX};
use php_obfuscator::variables::VARIABLE_PREFIX;
use tempfile::TempDir;

fn write_input(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn run(contents: &str, config: ObfuscationConfig) -> String {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "page.php", contents);
    let out = Obfuscator::new(config).start(&input).unwrap().unwrap();
    fs::read_to_string(out).unwrap()
}

#[test]
fn variable_rename_and_comment_removal() {
    // scenario: both $x occurrences become the same name, comment dropped
    let out = run(
        "<?php $x = $x + 1; // increment\n?>",
        ObfuscationConfig::default(),
    );
    let renamed = format!("{}{}", VARIABLE_PREFIX, digest("$x"));
    assert_eq!(out.matches(&renamed).count(), 2);
    assert!(!out.contains("increment"));
    assert!(!out.contains("//"));
}

#[test]
fn string_contents_are_never_rewritten() {
    let out = run(
        r#"<?php $msg = "do not touch $fake"; ?>"#,
        ObfuscationConfig::default(),
    );
    assert!(out.contains(r#""do not touch $fake""#));
    assert!(!out.contains("$msg"));
}

#[test]
fn wrong_extension_is_a_true_noop() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "notes.txt", "<?php $a = 1; ?>");
    let result = Obfuscator::new(ObfuscationConfig::default())
        .start(&input)
        .unwrap();
    assert!(result.is_none());
    // exactly the input file, no output produced
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    assert_eq!(fs::read_to_string(&input).unwrap(), "<?php $a = 1; ?>");
}

#[test]
fn declaration_and_call_site_share_one_function_name() {
    let mut config = ObfuscationConfig::default();
    config.obfuscate_declared_names = true;
    config.obfuscate_variables = false;
    let out = run(
        "<?php function doWork($a) { return $a; } ?> html <?php doWork($x); ?>",
        config,
    );
    let renamed = format!("{}{}", FUNCTION_PREFIX, digest("doWork"));
    assert_eq!(out.matches(&renamed).count(), 2);
    assert!(!out.contains("doWork"));
}

#[test]
fn class_names_are_renamed_with_the_class_tag() {
    let mut config = ObfuscationConfig::default();
    config.obfuscate_declared_names = true;
    let out = run(
        "<?php class Person { function greet() {} } $p = new Person(); ?>",
        config,
    );
    let renamed = format!("{}{}", CLASS_PREFIX, digest("Person"));
    assert_eq!(out.matches(&renamed).count(), 2);
}

#[test]
fn unterminated_block_truncates_the_walk() {
    // scenario: first block is processed, malformed tail passes through
    let out = run(
        "<?php $a = 1; ?> body <?php $b = 2;",
        ObfuscationConfig::default(),
    );
    assert!(!out.contains("$a"));
    assert!(out.ends_with("<?php $b = 2;"));
}

#[test]
fn excluded_variables_are_never_renamed() {
    let mut config = ObfuscationConfig::default();
    config.exclude_variable("$keep");
    let out = run("<?php $keep = $other; ?>", config);
    assert!(out.contains("$keep"));
    assert!(!out.contains("$other"));
}

#[test]
fn excluded_functions_are_never_renamed() {
    let mut config = ObfuscationConfig::default();
    config.obfuscate_declared_names = true;
    config.exclude_function("keepMe");
    let out = run("<?php function keepMe() {} keepMe(); ?>", config);
    assert_eq!(out.matches("keepMe").count(), 2);
}

#[test]
fn keep_whitespace_leaves_newlines_alone() {
    let mut config = ObfuscationConfig::default();
    config.remove_whitespace = false;
    config.obfuscate_variables = false;
    let out = run("<?php\n$a = 1;\n$b = 2;\n?>", config);
    assert_eq!(out.matches('\n').count(), 3);
}

#[test]
fn surrounding_text_is_untouched() {
    let out = run(
        "<html><body>\n<?php $a = 1; ?>\n</body></html>",
        ObfuscationConfig::default(),
    );
    assert!(out.starts_with("<html><body>\n"));
    assert!(out.ends_with("\n</body></html>"));
}

#[test]
fn original_file_is_left_unmodified() {
    let dir = TempDir::new().unwrap();
    let source = "<?php $a = 1; ?>";
    let input = write_input(&dir, "page.php", source);
    Obfuscator::new(ObfuscationConfig::default())
        .start(&input)
        .unwrap();
    assert_eq!(fs::read_to_string(&input).unwrap(), source);
}

#[test]
fn missing_input_is_an_io_error() {
    let err = Obfuscator::new(ObfuscationConfig::default())
        .start(std::path::Path::new("/nonexistent/page.php"))
        .unwrap_err();
    assert!(err.to_string().contains("io error"));
}
