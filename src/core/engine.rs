use crate::config::converter::ConverterCommand;
use crate::core::interrupt::InterruptListener;
use crate::core::locator::{locate_static_dir, StaticCandidates};
use crate::core::stage::{stage_inputs, StageGuard};
use crate::core::{ConfigProvider, Converter, PresentPlan};
use crate::utils::error::{PresentError, Result};
use std::path::{Path, PathBuf};

pub struct PresentEngine<C: ConfigProvider, X: Converter> {
    config: C,
    converter: X,
}

impl<C: ConfigProvider, X: Converter> PresentEngine<C, X> {
    pub fn new(config: C, converter: X) -> Self {
        Self { config, converter }
    }

    /// Checks the notebook and resolves the static folder and converter
    /// command. Nothing is written to disk.
    pub fn plan(&self, cwd: &Path) -> Result<PresentPlan> {
        let notebook = self.config.notebook();
        if !notebook.exists() {
            tracing::error!("❌ Could not find file: {}", notebook.display());
            return Err(PresentError::not_found(notebook));
        }
        let notebook_name = notebook
            .file_name()
            .ok_or_else(|| PresentError::usage("notebook", "Path does not name a file"))?;

        let candidates = StaticCandidates::resolve(&self.config, cwd);
        let static_dir = locate_static_dir(&candidates.ordered());

        let command = ConverterCommand::parse(self.config.converter())?;
        let args = command.slide_args(notebook_name, self.config.slides_config());

        Ok(PresentPlan {
            notebook: notebook.to_path_buf(),
            others: self.config.others().to_vec(),
            static_dir,
            program: command.program,
            args,
        })
    }

    /// Stages the inputs, serves the deck and cleans up. Returns the staging
    /// root, which no longer exists once this returns.
    pub async fn run(&self) -> Result<PathBuf> {
        tracing::info!("Starting ipynb-present");
        let original_dir = std::env::current_dir()?;
        let plan = self.plan(&original_dir)?;

        // 先註冊 Ctrl-C，複製檔案期間的中斷也要走清理流程
        let mut interrupts = InterruptListener::install();
        let mut guard = StageGuard::create(original_dir)?;
        let root = guard.root().to_path_buf();

        // 無論成功、失敗或中斷都要清理暫存目錄
        let outcome = tokio::select! {
            outcome = self.stage_and_serve(&mut guard, &plan) => outcome,
            _ = interrupts.recv() => {
                tracing::warn!("⏹️ Interrupt received, cleaning up");
                Err(PresentError::Interrupted)
            }
        };
        let cleaned = guard.cleanup();

        match (outcome, cleaned) {
            (Ok(()), Ok(())) => Ok(root),
            (Ok(()), Err(e)) => Err(e),
            (Err(e), Err(cleanup_err)) => {
                tracing::warn!("Cleanup after failure also failed: {}", cleanup_err);
                Err(e)
            }
            (Err(e), Ok(())) => Err(e),
        }
    }

    async fn stage_and_serve(&self, guard: &mut StageGuard, plan: &PresentPlan) -> Result<()> {
        guard.seed_template(plan.static_dir.as_ref())?;
        stage_inputs(guard.slides_dir(), &plan.notebook, &plan.others)?;

        guard.enter()?;
        self.converter
            .convert_and_serve(guard.slides_dir(), &plan.program, &plan.args)
            .await
    }
}
