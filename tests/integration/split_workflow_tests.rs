/*!
 * Integration tests for the PDF splitting workflow
 */

use std::fs;
use anyhow::Result;

use versesplit::app_config::Config;
use versesplit::app_controller::Controller;
use versesplit::errors::SplitError;
use crate::common::{self, FailingExtractor, FixedTextExtractor};

fn config_with_max_chars(max_chars: usize) -> Config {
    let mut config = Config::default();
    config.splitter.max_chars = max_chars;
    config
}

fn split_error(result: Result<versesplit::SplitReport>) -> SplitError {
    result
        .expect_err("run should fail")
        .downcast::<SplitError>()
        .expect("error should be a SplitError")
}

/// Test a full run from extracted text to numbered segment files
#[test]
fn test_controller_run_withCommentary_shouldWriteSegments() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let pdf = common::create_test_file(temp_dir.path(), "2 Juan.pdf", "%PDF-1.4")?;
    let output_dir = temp_dir.path().join("output");

    let controller = Controller::with_extractor(
        config_with_max_chars(160),
        FixedTextExtractor::boxed(&common::sample_commentary()),
    )?;
    let report = controller.run(&pdf, Some(output_dir.clone()))?;

    assert_eq!(report.book_name, "2 Juan");
    assert_eq!(report.blocks_found, 4);
    assert_eq!(report.blocks_skipped, 1);
    assert!(!report.segments.is_empty());

    for (i, segment) in report.segments.iter().enumerate() {
        assert_eq!(segment.path, output_dir.join(format!("2 Juan_{}.txt", i + 1)));
        assert!(segment.path.exists());
    }

    let all_text: Vec<String> = report
        .segments
        .iter()
        .map(|s| fs::read_to_string(&s.path))
        .collect::<std::io::Result<_>>()?;
    let joined = all_text.join("\n\n");
    assert!(!joined.contains("INTRODUCCIÓN GENERAL"));
    assert!(joined.starts_with("2 Juan 1:4 Me alegré mucho."));
    assert!(joined.ends_with("Confiesan a Cristo en la carne."));

    Ok(())
}

/// Test that the configured output directory is used when none is passed
#[test]
fn test_controller_run_withoutOutputDir_shouldUseConfiguredDir() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let pdf = common::create_test_file(temp_dir.path(), "Marcos.pdf", "%PDF-1.4")?;
    let mut config = Config::default();
    config.splitter.output_dir = temp_dir.path().join("segments").to_string_lossy().to_string();

    let controller = Controller::with_extractor(
        config,
        FixedTextExtractor::boxed("Marcos 1:1 Principio del evangelio. Marcos 1:2 Como está escrito."),
    )?;
    let report = controller.run(&pdf, None)?;

    assert_eq!(report.segments.len(), 1);
    assert!(temp_dir.path().join("segments").join("Marcos_1.txt").exists());

    Ok(())
}

/// Test that re-running on identical input produces identical files
#[test]
fn test_controller_run_twice_shouldProduceIdenticalFiles() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let pdf = common::create_test_file(temp_dir.path(), "2 Juan.pdf", "%PDF-1.4")?;

    let controller = Controller::with_extractor(
        config_with_max_chars(100),
        FixedTextExtractor::boxed(&common::sample_commentary()),
    )?;

    let first = controller.run(&pdf, Some(temp_dir.path().join("a")))?;
    let second = controller.run(&pdf, Some(temp_dir.path().join("b")))?;

    assert_eq!(first.segments.len(), second.segments.len());
    for (a, b) in first.segments.iter().zip(second.segments.iter()) {
        assert_eq!(fs::read(&a.path)?, fs::read(&b.path)?);
    }

    Ok(())
}

/// Test that a missing input aborts before extraction
#[test]
fn test_controller_run_withMissingFile_shouldFailWithNotFound() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_extractor(Config::default(), FixedTextExtractor::boxed(""))?;

    let error = split_error(controller.run(&temp_dir.path().join("nope.pdf"), None));

    assert!(matches!(error, SplitError::InputNotFound(_)));
    Ok(())
}

/// Test that a non-PDF input is rejected
#[test]
fn test_controller_run_withTextFile_shouldFailWithNotPdf() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "Lucas.txt", "Lucas 1:1 texto")?;
    let controller =
        Controller::with_extractor(Config::default(), FixedTextExtractor::boxed("Lucas 1:1 texto"))?;

    let error = split_error(controller.run(&input, None));

    assert!(matches!(error, SplitError::NotPdf(_)));
    Ok(())
}

/// Test that extraction failures propagate
#[test]
fn test_controller_run_withUndecodablePdf_shouldFailWithExtraction() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let pdf = common::create_test_file(temp_dir.path(), "broken.pdf", "garbage")?;
    let controller = Controller::with_extractor(Config::default(), Box::new(FailingExtractor))?;

    let error = split_error(controller.run(&pdf, Some(temp_dir.path().to_path_buf())));

    assert!(matches!(error, SplitError::Extraction { .. }));
    Ok(())
}

/// Test that a text without references ends with no blocks and no files
#[test]
fn test_controller_run_withoutReferences_shouldFailWithNoBlocks() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let pdf = common::create_test_file(temp_dir.path(), "Libro.pdf", "%PDF-1.4")?;
    let output_dir = temp_dir.path().join("output");
    let controller = Controller::with_extractor(
        Config::default(),
        FixedTextExtractor::boxed("Un prefacio sin ninguna cita."),
    )?;

    let error = split_error(controller.run(&pdf, Some(output_dir.clone())));

    assert!(matches!(error, SplitError::NoBlocks));
    assert!(!output_dir.exists());
    Ok(())
}

/// Test that a document made only of introductions ends with no blocks
#[test]
fn test_controller_run_withOnlyAdministrativeBlocks_shouldFailWithNoBlocks() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let pdf = common::create_test_file(temp_dir.path(), "Judas.pdf", "%PDF-1.4")?;
    let controller = Controller::with_extractor(
        Config::default(),
        FixedTextExtractor::boxed("Judas 1:1 Descripción general. Judas 1:2 Introducción general."),
    )?;

    let error = split_error(controller.run(&pdf, Some(temp_dir.path().join("out"))));

    assert!(matches!(error, SplitError::NoBlocks));
    Ok(())
}

/// Test that a zero limit is rejected when the controller is built
#[test]
fn test_controller_withZeroMaxChars_shouldFailValidation() {
    let result = Controller::with_extractor(config_with_max_chars(0), FixedTextExtractor::boxed(""));
    assert!(result.is_err());
}
