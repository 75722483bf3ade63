use std::io::{self, Write};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin, stdin};
use tokio::sync::watch;
use tracing::{debug, info};

use domain::field::{FieldKind, FieldValue};
use domain::form::{FormSchema, FormValues};
use domain::progress::UploadProgress;
use domain::submission::Submission;
use imgconsole_adapters::incoming::terminal::{
    menu::{self, MenuChoice},
    progress::ProgressView,
    prompts,
    renderer::ResultRenderer,
};
use imgconsole_application::error::{AppError, AppResult};

use super::state::AppState;

/// The interactive console loop: menu, per-field prompts, submission with a
/// live progress bar, result rendering. Reads stdin line by line; `q` or end
/// of input ends the session.
pub struct ConsoleApp {
    state: AppState,
}

impl ConsoleApp {
    #[must_use]
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub async fn run(self) -> AppResult<()> {
        let mut lines = BufReader::new(stdin()).lines();
        let mut out = io::stdout();

        loop {
            let active = self.state.session_service.ui_state().selected;
            menu::render_menu(&mut out, active.as_deref())?;
            write!(out, "Select an endpoint: ")?;
            out.flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };

            match menu::parse_menu_choice(&line) {
                MenuChoice::Quit => break,
                MenuChoice::Invalid => {
                    writeln!(out, "Unrecognized choice, enter a number or a name.")?;
                }
                MenuChoice::Endpoint(name) => {
                    self.run_endpoint(&name, &mut lines, &mut out).await?;
                }
            }
        }

        info!("Session closed");
        Ok(())
    }

    async fn run_endpoint(
        &self,
        endpoint_name: &str,
        lines: &mut Lines<BufReader<Stdin>>,
        out: &mut io::Stdout,
    ) -> AppResult<()> {
        let schema = self.state.session_service.select_endpoint(endpoint_name);
        debug!("Selected {} ({} fields)", schema.endpoint, schema.fields.len());

        let Some(values) = self.collect_values(&schema, lines, out).await? else {
            return Ok(());
        };

        let submission = Submission::new(&schema.endpoint, values);
        self.submit_with_progress(submission, out).await
    }

    /// Prompts for each field in schema order. Blank answers leave a field
    /// unset so validation can report what is missing. Returns `None` when
    /// stdin closes mid-form.
    async fn collect_values(
        &self,
        schema: &FormSchema,
        lines: &mut Lines<BufReader<Stdin>>,
        out: &mut io::Stdout,
    ) -> AppResult<Option<FormValues>> {
        let mut values = FormValues::new();

        for field in &schema.fields {
            loop {
                write!(out, "{}", prompts::field_prompt(field))?;
                out.flush()?;

                let Some(line) = lines.next_line().await? else {
                    return Ok(None);
                };

                match prompts::parse_field_input(field, &line) {
                    Ok(None) => break,
                    Ok(Some(value)) => {
                        if matches!(field.kind, FieldKind::File) {
                            self.preview(&value, out).await?;
                        }
                        values.insert(&field.name, value);
                        break;
                    }
                    Err(message) => {
                        writeln!(out, "{message}")?;
                    }
                }
            }
        }

        Ok(Some(values))
    }

    /// Live preview of the chosen file. A preview failure is reported but
    /// never blocks submission; the file is re-read when the form is sent.
    async fn preview(&self, value: &FieldValue, out: &mut io::Stdout) -> AppResult<()> {
        let Some(path) = value.as_path() else {
            return Ok(());
        };
        let mut renderer = ResultRenderer::new(&mut *out);
        match self.state.session_service.preview(path).await {
            Ok(preview) => renderer.render_preview(&preview)?,
            Err(error) => renderer.render_notice(&format!("Preview unavailable: {error}"))?,
        }
        Ok(())
    }

    /// Runs the submission on a task and mirrors progress reports into the
    /// terminal bar until the request resolves.
    async fn submit_with_progress(
        &self,
        submission: Submission,
        out: &mut io::Stdout,
    ) -> AppResult<()> {
        let mut progress_rx = fresh_progress_rx(&self.state.progress_rx);
        let session = Arc::clone(&self.state.session_service);
        let mut task = tokio::spawn(async move { session.submit(submission).await });

        let mut view = ProgressView::new(&mut *out);
        let joined = loop {
            tokio::select! {
                joined = &mut task => break joined,
                changed = progress_rx.changed() => {
                    if changed.is_ok() {
                        let progress = *progress_rx.borrow_and_update();
                        match progress {
                            UploadProgress::Idle => {}
                            observed => view.draw(observed.percent())?,
                        }
                    }
                }
            }
        };
        view.clear()?;
        drop(view);

        let result = joined.map_err(|e| AppError::TaskError {
            message: format!("Submission task failed: {e}"),
        })?;

        let mut renderer = ResultRenderer::new(&mut *out);
        match result {
            Ok(rendered) => renderer.render_result(&rendered)?,
            Err(error) => renderer.render_notice(&error.to_string())?,
        }
        Ok(())
    }
}

/// A cloned watch receiver inherits the *source* receiver's seen version,
/// and the source is never polled, so a plain clone would immediately replay
/// the previous submission's final value. Marking the clone unchanged makes
/// each submission's bar start from its own reports.
fn fresh_progress_rx(rx: &watch::Receiver<UploadProgress>) -> watch::Receiver<UploadProgress> {
    let mut fresh = rx.clone();
    fresh.mark_unchanged();
    fresh
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn a_fresh_receiver_does_not_replay_the_previous_submission() {
        let (tx, rx) = watch::channel(UploadProgress::Idle);
        tx.send(UploadProgress::Sending(50)).unwrap();
        tx.send(UploadProgress::Done).unwrap();

        let mut fresh = fresh_progress_rx(&rx);
        assert!(!fresh.has_changed().unwrap());
        assert_eq!(*fresh.borrow(), UploadProgress::Done);

        tx.send(UploadProgress::Sending(0)).unwrap();
        fresh.changed().await.unwrap();
        assert_eq!(*fresh.borrow_and_update(), UploadProgress::Sending(0));
    }

    #[tokio::test]
    async fn an_unpolled_clone_would_replay_stale_progress() {
        let (tx, rx) = watch::channel(UploadProgress::Idle);
        tx.send(UploadProgress::Done).unwrap();

        let mut stale = rx.clone();
        assert!(stale.has_changed().unwrap());
        assert_eq!(*stale.borrow_and_update(), UploadProgress::Done);

        // The source receiver itself still has the change pending.
        assert!(rx.has_changed().unwrap());
    }
}
