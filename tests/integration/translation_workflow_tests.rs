/*!
 * Integration tests for the segment translation workflow
 */

use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::rc::Rc;
use anyhow::Result;

use versesplit::app_config::WorkflowConfig;
use versesplit::errors::WorkflowError;
use versesplit::workflow::{SnapshotHook, TranslationWorkflow};
use crate::common;

/// Hook recording every snapshot request
struct RecordingHook {
    calls: Rc<RefCell<Vec<(usize, usize)>>>,
    fail: bool,
}

impl SnapshotHook for RecordingHook {
    fn snapshot(&mut self, first: usize, last: usize) -> Result<String, WorkflowError> {
        self.calls.borrow_mut().push((first, last));
        if self.fail {
            return Err(WorkflowError::SnapshotFailed("nothing to commit".to_string()));
        }
        Ok(format!("items {} to {}", first, last))
    }
}

/// Lay out segments, prompt and example inside `root`
fn setup_workspace(root: &Path, prefix: &str, segments: usize) -> Result<WorkflowConfig> {
    let segments_dir = root.join("output");
    fs::create_dir_all(&segments_dir)?;
    for n in 1..=segments {
        common::create_test_file(
            &segments_dir,
            &format!("{}_{}.txt", prefix, n),
            &format!("{} 1:{} comentario {}", prefix, n, n),
        )?;
    }
    let prompt = common::create_test_file(root, "prompt.txt", "Traduza para o português.")?;
    let example = common::create_test_file(root, "example.json", r#"{"livro": "Exemplo"}"#)?;

    Ok(WorkflowConfig {
        segments_dir: segments_dir.to_string_lossy().to_string(),
        translations_dir: root.join("traducoes").to_string_lossy().to_string(),
        segment_prefix: String::new(),
        prompt_file: prompt.to_string_lossy().to_string(),
        example_file: example.to_string_lossy().to_string(),
        total_expected: None,
        snapshot_batch_size: 2,
    })
}

fn workflow_with_hook(
    config: WorkflowConfig,
    fail: bool,
) -> Result<(TranslationWorkflow, Rc<RefCell<Vec<(usize, usize)>>>)> {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let hook = RecordingHook { calls: Rc::clone(&calls), fail };
    Ok((TranslationWorkflow::new(config, Box::new(hook))?, calls))
}

/// Test that segments are presented in numeric order, not name order
#[test]
fn test_nextPresentation_withFreshWorkspace_shouldPresentFirstSegment() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = setup_workspace(temp_dir.path(), "Marcos", 12)?;
    let (workflow, _) = workflow_with_hook(config, false)?;

    assert_eq!(workflow.prefix(), "Marcos");
    assert_eq!(workflow.total()?, 12);

    let pending: Vec<usize> = workflow.pending()?.iter().map(|s| s.number).collect();
    assert_eq!(pending, (1..=12).collect::<Vec<_>>());

    let presentation = workflow.next_presentation()?.expect("a segment should be pending");
    assert_eq!(presentation.number, 1);
    assert_eq!(presentation.total, 12);
    assert_eq!(presentation.content, "Marcos 1:1 comentario 1");
    assert!(presentation.destination.ends_with("marcos_001_traduzido.json"));

    let rendered = presentation.to_string();
    assert!(rendered.contains("FILE TO TRANSLATE: 1/12"));
    assert!(rendered.contains("Traduza para o português."));
    assert!(rendered.contains(r#"{"livro": "Exemplo"}"#));

    Ok(())
}

/// Test accepting translations, snapshot batching and progress
#[test]
fn test_accept_withValidJson_shouldStoreAndSnapshotPerBatch() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = setup_workspace(temp_dir.path(), "Lucas", 3)?;
    let (mut workflow, calls) = workflow_with_hook(config, false)?;

    let first = workflow.accept(1, r#"{"livro": "Lucas", "texto": "ação"}"#)?;
    assert!(first.snapshot.is_none());
    assert_eq!(first.progress.done, 1);
    assert_eq!(first.progress.total, 3);
    let stored = fs::read_to_string(&first.path)?;
    assert!(stored.contains("\"texto\": \"ação\""));

    let second = workflow.accept(2, r#"{"livro": "Lucas"}"#)?;
    assert_eq!(second.snapshot.as_deref(), Some("items 1 to 2"));
    assert_eq!(*calls.borrow(), vec![(1, 2)]);

    let next = workflow.next_presentation()?.expect("segment 3 should be pending");
    assert_eq!(next.number, 3);

    let third = workflow.accept(3, r#"{"livro": "Lucas"}"#)?;
    assert!(third.progress.is_complete());
    assert!(workflow.next_presentation()?.is_none());

    Ok(())
}

/// Test that invalid JSON is refused and nothing is written
#[test]
fn test_accept_withInvalidJson_shouldFailWithoutWriting() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = setup_workspace(temp_dir.path(), "Lucas", 2)?;
    let translations_dir = config.translations_dir.clone();
    let (mut workflow, _) = workflow_with_hook(config, false)?;

    let error = workflow.accept(1, "{ \"livro\": ").unwrap_err();

    assert!(matches!(
        error.downcast_ref::<WorkflowError>(),
        Some(WorkflowError::InvalidTranslation(_))
    ));
    assert!(!Path::new(&translations_dir).join("lucas_001_traduzido.json").exists());

    Ok(())
}

/// Test that an item number beyond the explicit total is rejected
#[test]
fn test_accept_withNumberBeyondTotal_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let mut config = setup_workspace(temp_dir.path(), "Lucas", 2)?;
    config.total_expected = Some(2);
    let (mut workflow, _) = workflow_with_hook(config, false)?;

    let error = workflow.accept(3, "{}").unwrap_err();

    assert!(matches!(
        error.downcast_ref::<WorkflowError>(),
        Some(WorkflowError::ItemOutOfRange { number: 3, total: 2 })
    ));

    Ok(())
}

/// Test that a failing snapshot does not undo the acceptance
#[test]
fn test_accept_withFailingSnapshot_shouldStillStoreTranslation() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = setup_workspace(temp_dir.path(), "Lucas", 2)?;
    let (mut workflow, calls) = workflow_with_hook(config, true)?;

    workflow.accept(1, "{}")?;
    let outcome = workflow.accept(2, "{}")?;

    assert!(outcome.snapshot.is_none());
    assert!(outcome.path.exists());
    assert_eq!(calls.borrow().len(), 1);

    Ok(())
}

/// Test that missing context files are reported
#[test]
fn test_nextPresentation_withMissingPrompt_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let mut config = setup_workspace(temp_dir.path(), "Lucas", 1)?;
    config.prompt_file = temp_dir.path().join("missing.txt").to_string_lossy().to_string();
    let (workflow, _) = workflow_with_hook(config, false)?;

    let error = workflow.next_presentation().unwrap_err();

    assert!(matches!(
        error.downcast_ref::<WorkflowError>(),
        Some(WorkflowError::ContextFileMissing(_))
    ));

    Ok(())
}

/// Test that an empty segments directory cannot start a workflow
#[test]
fn test_new_withNoSegments_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let mut config = setup_workspace(temp_dir.path(), "Lucas", 0)?;
    config.segment_prefix = String::new();

    assert!(workflow_with_hook(config, false).is_err());

    Ok(())
}
