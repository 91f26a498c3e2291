//! Display implementations for domain models.
//!
//! This module contains all Display trait implementations for the core domain
//! models, separated from the model definitions to maintain clean separation of
//! concerns.
//!
//! Section headings carry both the English and the Hindi label, the way the
//! advisory cards are written for farmers.

use std::fmt;

use crate::models::{CropSummary, NextAction, Stage, TimelineEntry};

/// Guidance sections for a stage. Each view writes its own heading.
impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;
        writeln!(f, "- **Duration**: {}", self.duration)?;
        writeln!(f)?;

        writeln!(f, "#### Key Tasks / मुख्य कार्य")?;
        writeln!(f)?;
        for task in &self.tasks {
            writeln!(f, "- {task}")?;
        }
        writeln!(f)?;

        writeln!(f, "#### Fertilizer / उर्वरक")?;
        writeln!(f)?;
        if self.needs_fertilizer() {
            for fertilizer in &self.fertilizer {
                writeln!(f, "- {fertilizer}")?;
            }
        } else {
            writeln!(f, "No fertilizer required at this stage")?;
        }
        writeln!(f)?;

        writeln!(f, "#### Irrigation / सिंचाई")?;
        writeln!(f)?;
        writeln!(f, "{}", self.irrigation)?;
        writeln!(f)?;

        if !self.pest_watch.is_empty() {
            writeln!(f, "#### Pest Watch / कीट निगरानी")?;
            writeln!(f)?;
            for pest in &self.pest_watch {
                writeln!(f, "- {pest}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for CropSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} / {} (ID: {})",
            self.name, self.localized_name, self.id
        )?;
        writeln!(f)?;
        writeln!(f, "- **Season**: {}", self.season)?;
        writeln!(f, "- **Stages**: {}", self.total_stages)?;
        writeln!(f)?; // Add blank line after each crop

        Ok(())
    }
}

impl fmt::Display for TimelineEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.index + 1,
            self.stage.name,
            self.status.with_icon()
        )?;
        writeln!(f)?;
        writeln!(f, "{}", self.stage.localized_name)?;
        writeln!(f)?;
        writeln!(f, "{}", self.stage.description)?;
        writeln!(f)?;
        writeln!(f, "- Duration: {}", self.stage.duration)?;
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for NextAction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NextAction::Pending { stage, .. } => writeln!(
                f,
                "Prepare for **{}** stage. Expected duration: {}",
                stage.name, stage.duration
            ),
            NextAction::HarvestComplete => writeln!(
                f,
                "Congratulations! You've reached the final stage. Prepare for harvest!"
            ),
        }
    }
}
