//! Built-in species reference data. Read-only; entries are only ever used as
//! templates to seed a new plant and its care schedule.

use crate::models::{CareRequirements, Species};

pub const SPECIES_DB: &[Species] = &[
    Species {
        id: "monstera-deliciosa",
        common_name: "Monstera Deliciosa",
        scientific_name: "Monstera deliciosa",
        image_url: "https://images.unsplash.com/photo-1614594975525-e45190c55d0b?auto=format&fit=crop&q=80&w=800",
        description: "Famous for its natural leaf holes, this tropical beauty is a favorite for its dramatic foliage and easy-going nature.",
        care: CareRequirements {
            water: "Water every 1-2 weeks, allowing soil to dry out between waterings.",
            light: "Bright to medium indirect light. Avoid direct sun.",
            temperature: "65\u{b0}F - 85\u{b0}F (18\u{b0}C - 30\u{b0}C)",
            humidity: "Normal to high humidity preferred.",
        },
        common_issues: &[
            "Yellowing leaves (overwatering)",
            "Brown tips (low humidity)",
            "Leggy growth (low light)",
        ],
        suggested_water_frequency: 10,
        suggested_mist_frequency: 3,
        suggested_fertilize_frequency: 30,
    },
    Species {
        id: "snake-plant",
        common_name: "Snake Plant",
        scientific_name: "Sansevieria trifasciata",
        image_url: "https://images.unsplash.com/photo-1593482886875-6647f38fa83f?auto=format&fit=crop&q=80&w=800",
        description: "An architectural plant with upright leaves. Extremely hardy and excellent at purifying air.",
        care: CareRequirements {
            water: "Water every 2-3 weeks. Allow soil to dry completely.",
            light: "Low to bright indirect light. Can tolerate some direct sun.",
            temperature: "55\u{b0}F - 85\u{b0}F (13\u{b0}C - 30\u{b0}C)",
            humidity: "Low to normal humidity.",
        },
        common_issues: &["Root rot (overwatering)", "Mushy leaves (cold damage)"],
        suggested_water_frequency: 18,
        suggested_mist_frequency: 0,
        suggested_fertilize_frequency: 60,
    },
    Species {
        id: "fiddle-leaf-fig",
        common_name: "Fiddle Leaf Fig",
        scientific_name: "Ficus lyrata",
        image_url: "https://images.unsplash.com/photo-1597055181300-e30ba1546d26?auto=format&fit=crop&q=80&w=800",
        description: "Known for its large, violin-shaped leaves. It can be finicky but makes a stunning statement piece.",
        care: CareRequirements {
            water: "Water once a week. Keep soil consistently moist but not soaking.",
            light: "Bright, filtered light. Rotating the plant helps even growth.",
            temperature: "60\u{b0}F - 75\u{b0}F (15\u{b0}C - 24\u{b0}C)",
            humidity: "High humidity is essential.",
        },
        common_issues: &["Dropping leaves (drafts/dryness)", "Brown spots (root rot)"],
        suggested_water_frequency: 7,
        suggested_mist_frequency: 2,
        suggested_fertilize_frequency: 30,
    },
    Species {
        id: "pothos",
        common_name: "Golden Pothos",
        scientific_name: "Epipremnum aureum",
        image_url: "https://images.unsplash.com/photo-1596722889246-81765c71d24c?auto=format&fit=crop&q=80&w=800",
        description: "The ultimate beginner plant. Fast-growing trailing vines that tolerate neglect and low light.",
        care: CareRequirements {
            water: "Water every 1-2 weeks. Tolerates erratic watering.",
            light: "Low to bright indirect light.",
            temperature: "60\u{b0}F - 85\u{b0}F (15\u{b0}C - 30\u{b0}C)",
            humidity: "Any humidity level.",
        },
        common_issues: &["Yellow leaves (overwatering)", "Loss of variegation (low light)"],
        suggested_water_frequency: 10,
        suggested_mist_frequency: 0,
        suggested_fertilize_frequency: 30,
    },
    Species {
        id: "zz-plant",
        common_name: "ZZ Plant",
        scientific_name: "Zamioculcas zamiifolia",
        image_url: "https://images.unsplash.com/photo-1632207691143-643e2a9a9361?auto=format&fit=crop&q=80&w=800",
        description: "With waxy, shiny leaves, the ZZ plant is drought tolerant and thrives in low light conditions.",
        care: CareRequirements {
            water: "Water every 2-3 weeks. Allow soil to dry out.",
            light: "Low to bright indirect light.",
            temperature: "60\u{b0}F - 75\u{b0}F (15\u{b0}C - 24\u{b0}C)",
            humidity: "Low to average humidity.",
        },
        common_issues: &[
            "Yellowing lower leaves (overwatering)",
            "Wrinkled stems (severe underwatering)",
        ],
        suggested_water_frequency: 18,
        suggested_mist_frequency: 0,
        suggested_fertilize_frequency: 60,
    },
    Species {
        id: "peace-lily",
        common_name: "Peace Lily",
        scientific_name: "Spathiphyllum",
        image_url: "https://images.unsplash.com/photo-1593691509543-c55ce32e0112?auto=format&fit=crop&q=80&w=800",
        description: "Elegant white flowers and dark green leaves. It dramatically droops when thirsty, acting as its own sensor.",
        care: CareRequirements {
            water: "Keep soil moist. Water weekly or when leaves droop.",
            light: "Low to medium indirect light.",
            temperature: "65\u{b0}F - 80\u{b0}F (18\u{b0}C - 26\u{b0}C)",
            humidity: "High humidity preferred.",
        },
        common_issues: &["Brown tips (tap water chemicals)", "Green flowers (low light)"],
        suggested_water_frequency: 7,
        suggested_mist_frequency: 2,
        suggested_fertilize_frequency: 45,
    },
    Species {
        id: "spider-plant",
        common_name: "Spider Plant",
        scientific_name: "Chlorophytum comosum",
        image_url: "https://images.unsplash.com/photo-1572688484279-a27d0354ea47?auto=format&fit=crop&q=80&w=800",
        description: "Produces \"babies\" or spiderettes that dangle from the mother plant. Very easy to propagate.",
        care: CareRequirements {
            water: "Water weekly. Keep soil evenly moist.",
            light: "Bright, indirect light.",
            temperature: "55\u{b0}F - 80\u{b0}F (13\u{b0}C - 27\u{b0}C)",
            humidity: "Average humidity.",
        },
        common_issues: &["Brown tips (fluoride in water)", "Fading stripes (low light)"],
        suggested_water_frequency: 7,
        suggested_mist_frequency: 4,
        suggested_fertilize_frequency: 30,
    },
    Species {
        id: "aloe-vera",
        common_name: "Aloe Vera",
        scientific_name: "Aloe barbadensis miller",
        image_url: "https://images.unsplash.com/photo-1554631221-f9603e6808be?auto=format&fit=crop&q=80&w=800",
        description: "A succulent known for its healing gel. Requires very little water and loves the sun.",
        care: CareRequirements {
            water: "Water deeply every 3 weeks. Soil must dry completely.",
            light: "Bright, direct sunlight.",
            temperature: "55\u{b0}F - 80\u{b0}F (13\u{b0}C - 27\u{b0}C)",
            humidity: "Low humidity.",
        },
        common_issues: &["Mushy stems (rot)", "Flat leaves (insufficient light)"],
        suggested_water_frequency: 21,
        suggested_mist_frequency: 0,
        suggested_fertilize_frequency: 90,
    },
    Species {
        id: "rubber-plant",
        common_name: "Rubber Plant",
        scientific_name: "Ficus elastica",
        image_url: "https://images.unsplash.com/photo-1598880940371-c756e026eff3?auto=format&fit=crop&q=80&w=800",
        description: "Has thick, glossy, rubbery leaves. Can grow into a large indoor tree.",
        care: CareRequirements {
            water: "Water every 1-2 weeks. Keep soil moist in summer.",
            light: "Bright, indirect light.",
            temperature: "60\u{b0}F - 75\u{b0}F (15\u{b0}C - 24\u{b0}C)",
            humidity: "Normal to high humidity.",
        },
        common_issues: &["Dropping lower leaves (low light)", "Dusty leaves (needs wiping)"],
        suggested_water_frequency: 10,
        suggested_mist_frequency: 4,
        suggested_fertilize_frequency: 30,
    },
];

pub fn find(id: &str) -> Option<&'static Species> {
    SPECIES_DB.iter().find(|s| s.id == id)
}
