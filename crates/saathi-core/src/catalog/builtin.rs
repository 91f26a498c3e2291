//! The crop catalog compiled into the program.

use crate::models::{Crop, Stage};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Crop records for the built-in catalog, in display order.
pub(crate) fn crops() -> Vec<Crop> {
    vec![wheat(), rice()]
}

fn wheat() -> Crop {
    Crop {
        id: "wheat".into(),
        name: "Wheat".into(),
        localized_name: "गेहूं".into(),
        season: "Rabi (Oct - Apr)".into(),
        stages: vec![
            Stage {
                name: "Land Preparation".into(),
                localized_name: "भूमि तैयारी".into(),
                duration: "15-20 days before sowing".into(),
                description: "Prepare field for optimal seed germination".into(),
                tasks: strings(&[
                    "Deep ploughing with tractor/bullocks",
                    "Remove crop residues and weeds",
                    "Level the field properly",
                    "Apply organic manure (FYM)",
                ]),
                fertilizer: strings(&["10-15 tonnes FYM per hectare"]),
                irrigation: "Pre-sowing irrigation if required".into(),
                pest_watch: strings(&["Termites in organic matter"]),
            },
            Stage {
                name: "Sowing Stage".into(),
                localized_name: "बुवाई".into(),
                duration: "Nov 15 - Dec 15".into(),
                description: "Critical stage for proper establishment".into(),
                tasks: strings(&[
                    "Select quality certified seeds",
                    "Seed treatment with fungicide",
                    "Maintain proper row spacing (20cm)",
                    "Ensure uniform seed depth (3-5cm)",
                ]),
                fertilizer: strings(&["60 kg Nitrogen", "40 kg Phosphorus", "30 kg Potash"]),
                irrigation: "Light irrigation after sowing".into(),
                pest_watch: strings(&["Birds", "Rodents", "Cutworms"]),
            },
            Stage {
                name: "Vegetative Growth".into(),
                localized_name: "वानस्पतिक विकास".into(),
                duration: "30-45 days after sowing".into(),
                description: "Plant establishment and tillering phase".into(),
                tasks: strings(&[
                    "First weeding and hoeing",
                    "Monitor plant population",
                    "Apply first nitrogen dose",
                    "Check for pest and diseases",
                ]),
                fertilizer: strings(&["30 kg Nitrogen as top dressing"]),
                irrigation: "2-3 irrigations as per soil moisture".into(),
                pest_watch: strings(&["Aphids", "Leaf rust", "Yellow rust"]),
            },
            Stage {
                name: "Flowering Stage".into(),
                localized_name: "फूल आना".into(),
                duration: "75-85 days after sowing".into(),
                description: "Critical stage determining yield".into(),
                tasks: strings(&[
                    "Ensure adequate moisture",
                    "Apply second nitrogen dose",
                    "Monitor for diseases",
                    "Protect from extreme weather",
                ]),
                fertilizer: strings(&["30 kg Nitrogen (remaining dose)"]),
                irrigation: "Critical irrigation required".into(),
                pest_watch: strings(&["Brown rust", "Loose smut", "Karnal bunt"]),
            },
            Stage {
                name: "Grain Formation".into(),
                localized_name: "दाना भरना".into(),
                duration: "85-110 days after sowing".into(),
                description: "Grain filling and weight determination".into(),
                tasks: strings(&[
                    "Maintain soil moisture",
                    "Watch for lodging",
                    "Spray for late season pests",
                    "Plan harvesting logistics",
                ]),
                fertilizer: strings(&["Foliar spray of micronutrients"]),
                irrigation: "Light irrigation if needed".into(),
                pest_watch: strings(&["Stem borer", "Head scab", "Storage pests"]),
            },
            Stage {
                name: "Maturity & Harvest".into(),
                localized_name: "पकना और कटाई".into(),
                duration: "110-130 days after sowing".into(),
                description: "Harvest at proper maturity".into(),
                tasks: strings(&[
                    "Check grain moisture (12-14%)",
                    "Harvest on clear weather",
                    "Proper drying and storage",
                    "Plan for next crop",
                ]),
                fertilizer: Vec::new(),
                irrigation: "Stop 10 days before harvest".into(),
                pest_watch: strings(&["Storage insects", "Rodents"]),
            },
        ],
    }
}

// Only the nursery stage is curated so far.
fn rice() -> Crop {
    Crop {
        id: "rice".into(),
        name: "Rice".into(),
        localized_name: "चावल".into(),
        season: "Kharif (Jun - Nov)".into(),
        stages: vec![Stage {
            name: "Nursery Preparation".into(),
            localized_name: "पौधशाला तैयारी".into(),
            duration: "25-30 days before transplanting".into(),
            description: "Prepare healthy seedlings".into(),
            tasks: strings(&[
                "Select high-quality seeds",
                "Prepare nursery beds",
                "Seed treatment and sowing",
                "Maintain proper water level",
            ]),
            fertilizer: strings(&["Well-decomposed FYM"]),
            irrigation: "Maintain 2-5 cm water level".into(),
            pest_watch: strings(&["Damping off", "Stem borer"]),
        }],
    }
}
