//! Extract Use Case
//!
//! Orchestrates one run:
//! 1. Validate the request against its mode
//! 2. Identify the image(s): the explicit ROM, or discovery plus selection
//! 3. Build one plan per image
//! 4. Run each plan in order, recording failures without stopping
//!
//! Everything before step 4 fails the whole run; nothing is spawned until
//! every image has been identified.

use std::path::Path;

use crate::domain::entities::{BuildPlan, IdentifiedImage};
use crate::domain::ports::{ExtractEvent, ExtractEventSink, ProcessRunner, SelectionPrompt};
use crate::domain::services::{select, sorted, PlanBuilder, SelectOptions};
use crate::domain::value_objects::ExtractMode;
use crate::error::{RomexError, RomexResult};
use crate::infrastructure::{discover, ImageProber};

use super::options::ExtractOptions;
use super::result::{ExtractResult, ItemOutcome, ItemStatus};

/// Extract use case, parameterized by the process runner so tests can
/// observe the argument vectors without spawning anything.
pub struct ExtractUseCase<'a, R: ProcessRunner> {
    prober: ImageProber<'a>,
    planner: PlanBuilder,
    runner: R,
}

impl<'a, R: ProcessRunner> ExtractUseCase<'a, R> {
    pub fn new(prober: ImageProber<'a>, planner: PlanBuilder, runner: R) -> Self {
        Self {
            prober,
            planner,
            runner,
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Execute the run.
    ///
    /// Identification, selection and request validation errors are returned
    /// as `Err`. Per-image planning and execution failures end up in the
    /// result instead.
    pub fn execute(
        &self,
        options: &ExtractOptions,
        prompt: &mut dyn SelectionPrompt,
        events: &dyn ExtractEventSink,
    ) -> RomexResult<ExtractResult> {
        options.request.validate()?;

        let mut result = ExtractResult {
            items: Vec::new(),
            dry_run: options.dry_run,
        };

        if options.mode() == ExtractMode::CustomArchive {
            if let Some(rom) = &options.rom {
                return Err(RomexError::InvalidModeCombination(format!(
                    "a ROM ({}) was given for a custom archive build",
                    rom.display()
                )));
            }
            let planned = self.planner.build_custom_archive(&options.request);
            result.items.push(self.process(0, None, planned, options, events));
        } else {
            let images = self.identify(options, prompt, events)?;
            for (index, image) in images.iter().enumerate() {
                let planned = self.planner.build(image, &options.request);
                let outcome = self.process(index, Some(image.path()), planned, options, events);
                result.items.push(outcome);
            }
        }

        events.on_event(ExtractEvent::Completed {
            succeeded: result.succeeded(),
            failed: result.failed(),
            dry_run: options.dry_run,
        });

        Ok(result)
    }

    fn identify(
        &self,
        options: &ExtractOptions,
        prompt: &mut dyn SelectionPrompt,
        events: &dyn ExtractEventSink,
    ) -> RomexResult<Vec<IdentifiedImage>> {
        if let Some(rom) = &options.rom {
            let image = self.prober.probe(rom)?;
            emit_identified(&image, events);
            return Ok(vec![image]);
        }

        let candidates = discover(&options.search_dir, &self.prober, events)?;
        for image in &candidates {
            emit_identified(image, events);
        }
        let count = candidates.len();

        let selected = if options.all && count > 0 {
            sorted(candidates)
        } else {
            let select_options = SelectOptions::new(&options.search_dir)
                .with_interactive(options.interactive);
            select(candidates, &select_options, prompt)?
        };

        events.on_event(ExtractEvent::Selected {
            selected: selected.len(),
            candidates: count,
        });
        Ok(selected)
    }

    fn process(
        &self,
        index: usize,
        rom: Option<&Path>,
        planned: RomexResult<BuildPlan>,
        options: &ExtractOptions,
        events: &dyn ExtractEventSink,
    ) -> ItemOutcome {
        let rom = rom.map(Path::to_path_buf);

        let plan = match planned {
            Ok(plan) => plan,
            Err(err) => {
                events.on_event(ExtractEvent::ExtractionFailed {
                    index,
                    rom: rom.clone(),
                    error: err.to_string(),
                });
                return ItemOutcome {
                    rom,
                    plan: None,
                    status: ItemStatus::Failed(err.to_string()),
                };
            }
        };

        events.on_event(ExtractEvent::PlanReady {
            index,
            mode: plan.mode(),
            rom: rom.clone(),
            command: plan.display_command(),
        });

        if options.dry_run {
            return ItemOutcome {
                rom,
                plan: Some(plan),
                status: ItemStatus::Planned,
            };
        }

        let status = match self.run(&plan) {
            Ok(()) => {
                events.on_event(ExtractEvent::ExtractionSucceeded {
                    index,
                    rom: rom.clone(),
                });
                ItemStatus::Succeeded
            }
            Err(err) => {
                events.on_event(ExtractEvent::ExtractionFailed {
                    index,
                    rom: rom.clone(),
                    error: err.to_string(),
                });
                ItemStatus::Failed(err.to_string())
            }
        };

        ItemOutcome {
            rom,
            plan: Some(plan),
            status,
        }
    }

    fn run(&self, plan: &BuildPlan) -> RomexResult<()> {
        let status = self.runner.run(plan.executable(), &plan.args())?;
        if status.success() {
            Ok(())
        } else {
            Err(RomexError::ExtractionFailed {
                command: plan.display_command(),
                status: status.to_string(),
            })
        }
    }
}

fn emit_identified(image: &IdentifiedImage, events: &dyn ExtractEventSink) {
    events.on_event(ExtractEvent::ImageIdentified {
        path: image.path().to_path_buf(),
        version: image.descriptor().name().to_string(),
        checksum: image.checksum().to_string(),
        byte_order: image.byte_order().to_string(),
        content_hash: image.content_hash().map(|h| h.to_string()),
    });
}
