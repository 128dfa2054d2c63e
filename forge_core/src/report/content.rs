//! Fixed text of the build guide: checklists, procedures and reference tables
//! that do not depend on the design.

pub const SAFETY_WARNING: &str = "This forge operates with combustible gas at high temperatures. \
Improper construction or operation can result in fire, explosion, severe burns, carbon monoxide \
poisoning, or death. Read and understand ALL safety requirements before beginning construction.";

pub const SAFETY_EQUIPMENT: &[&str] = &[
    "ABC-rated fire extinguisher (within arm's reach during operation)",
    "Safety glasses (wear at ALL times near operating forge)",
    "Leather gloves (minimum 14\" gauntlet style)",
    "Leather apron or jacket",
    "Hearing protection (blower noise can cause hearing damage)",
    "Steel-toed boots (protection from dropped hot material)",
    "Face shield (for forge welding operations)",
];

pub const WORKSPACE_REQUIREMENTS: &[&str] = &[
    "NEVER operate indoors or in enclosed spaces",
    "Minimum 10' x 10' clear area around forge",
    "Concrete, gravel, or dirt floor (NO wood decking)",
    "Overhead clearance minimum 8' (no combustible ceiling)",
    "Remove all combustibles within 5 feet of forge",
    "Install CO detector in adjacent enclosed spaces",
    "Ensure adequate ventilation even outdoors",
];

pub const GAS_SAFETY: &[&str] = &[
    "Leak test ALL connections with soapy water before EVERY use (first month)",
    "Use only approved gas fittings and hoses rated for propane",
    "Install shutoff valve within reach of operating position",
    "NEVER use Teflon tape on flare fittings",
    "Keep propane tank upright and secured",
    "Store spare tanks outdoors, away from forge",
    "Replace hoses showing any wear, cracking, or damage",
];

/// (situation, action)
pub const EMERGENCY_PROCEDURES: &[(&str, &str)] = &[
    (
        "Gas leak detected",
        "Close tank valve immediately, evacuate area, ventilate, do NOT operate any electrical switches",
    ),
    (
        "Fire outside forge",
        "Close gas valve, use fire extinguisher, call 911 if not immediately controlled",
    ),
    (
        "Blower failure",
        "Close gas valve IMMEDIATELY, gas will accumulate without airflow",
    ),
    (
        "Burns",
        "Cool with water, seek medical attention for burns larger than 2\" or on face, hands or joints",
    ),
    (
        "CO symptoms (headache, dizziness)",
        "Leave area immediately, get fresh air, seek medical attention",
    ),
];

/// (item, quantity, notes) rows of the steel BOM that don't scale
pub const STEEL_BOM_FIXED: &[(&str, &str, &str)] = &[
    ("1.5\" Pipe", "24-36\"", "Air inlet"),
    ("1/4\" Pipe", "12\"", "Gas injection"),
    ("1/8\" Sheet Steel", "4 sq ft", "Door frames, baffle"),
    ("1/2\" Round Rod", "24\"", "Door tracks, handles"),
];

pub const REFRACTORY_BOM_FIXED: &[(&str, &str, &str)] = &[
    ("Rigidizer", "1-2 quarts", "Seal blanket surface"),
    ("ITC-100 (optional)", "1 pint", "IR reflective coating"),
    ("Stainless Pins/Staples", "50-100", "Secure blanket"),
];

pub const HARDWARE_BOM_FIXED: &[(&str, &str, &str)] = &[
    ("1.5\" Gate Valve", "1", "Air control"),
    ("Variable Speed Controller", "1", "Ceiling fan type (NOT dimmer)"),
    ("Propane Regulator", "1", "0-30 PSI adjustable"),
    ("Pressure Gauge", "1", "0-15 PSI display"),
    ("1/4\" Ball Valve", "1", "Main gas shutoff"),
    ("1/4\" Needle Valve", "1", "Fine adjustment"),
    ("1/4\" Solenoid Valve", "1", "Safety (wired to blower)"),
    ("Fire Extinguisher", "1", "ABC rated, 5+ lb"),
];

pub const BOLTS_ROW: (&str, &str, &str) = ("5/16\" or 3/8\" Bolts", "40-50", "Grade 5+, 4 per corner");

pub const CUTTING_NOTES: &[&str] = &[
    "Cut angle iron ends at 45° for miter joints at corners",
    "Drill bolt holes slightly oversize (1/64\") for alignment tolerance",
    "Deburr all cut edges to prevent injury during assembly",
    "Use angle iron as drilling template for plate holes",
];

pub const BODY_INTRO: &str = "The forge body uses bolted angle iron construction for easy assembly \
and future maintenance. All six panels bolt to the internal angle iron frame.";

/// Body assembly steps before and after the burner hole step
pub const ASSEMBLY_STEPS_BEFORE_BURNER: &[&str] = &[
    "Cut all angle iron pieces to length per cut list",
    "Drill bolt holes in angle iron at 3-4\" spacing",
    "Assemble angle iron frame (dry fit, no plates)",
    "Verify frame is square using diagonal measurements",
    "Use frame as template to drill plate holes",
    "Cut door opening in front panel",
];

pub const ASSEMBLY_STEPS_AFTER_BURNER: &[&str] = &[
    "Bolt bottom panel to frame first",
    "Attach side panels",
    "Install front and rear panels",
    "Top panel installs after refractory lining",
];

pub const CASTING_STEPS_FIXED: &[&str] = &[
    "Space straws ~3/4\" apart in staggered rows",
    "Mix Kast-O-Lite 30 to peanut butter consistency",
    "Pack refractory firmly around straws",
    "Vibrate or tap mold to release air bubbles",
    "Cure 24-48 hours before demolding",
    "Remove straws (burn out or pull)",
    "Oven cure: 200°F for 2 hours, then 350°F for 2 hours",
    "Mount to burner housing with refractory cement",
];

pub const DOOR_INTRO: &str = "Sliding firebrick doors provide excellent heat retention and \
one-handed operation. The doors hang from a round rod track above the opening.";

pub const DOOR_STEPS: &[&str] = &[
    "Weld 1/8\" angle iron into rectangular door frame",
    "Add tube or pipe hanger on top to slide on rod",
    "Cut firebricks to fit inside frame",
    "Secure bricks with high-temp cement or wire",
    "Weld handle to one side",
    "Weld rod supports above door opening",
    "Install 1/2\" round rod through supports",
    "Hang door and test slide action",
];

/// Air supply rows after the blower and static pressure rows
pub const AIR_SYSTEM_FIXED: &[(&str, &str)] = &[
    ("Pipe Size", "1.5\" throughout"),
    ("Gate Valve", "1.5\" for coarse air control"),
    ("Speed Controller", "Ceiling fan type (NOT lamp dimmer)"),
    ("Flex Connection", "1.5\" silicone hose, 12-18\""),
];

pub const GAS_SYSTEM: &[(&str, &str)] = &[
    ("Propane Tank", "20-100 lb cylinder"),
    ("Regulator", "Adjustable 0-30 PSI"),
    ("Pressure Gauge", "0-15 PSI display"),
    ("Main Shutoff", "1/4\" ball valve"),
    ("Solenoid Valve", "1/4\" normally closed (wire to blower power)"),
    ("Needle Valve", "1/4\" for fine adjustment"),
    ("Gas Line", "1/4\" black iron or approved propane hose"),
    ("Operating Pressure", "5-10 PSI typical"),
];

pub const GAS_SAFETY_NOTE: &str = "Wire the gas solenoid valve to blower power so gas cannot flow \
when the blower is off. Leak test the entire gas system with soapy water before first use.";

pub const LINING_STEPS_FIXED: &[&str] = &[
    "Install floor first: layer of IFB bricks on thin refractory cement bed",
    "Line walls with 2\" ceramic blanket",
    "Secure blanket with stainless pins every 4-6\"",
    "Line ceiling with 2\" ceramic blanket",
    "Apply rigidizer to all blanket surfaces (wear respirator!)",
    "Allow rigidizer to dry completely (24 hours)",
    "Optional: Apply ITC-100 coating for IR reflection",
    "Install top panel after lining is complete",
];

pub const CURING_INTRO: &str =
    "Improper curing will cause refractory to crack and fail. Follow this schedule:";

/// (day, temperature, duration, notes)
pub const CURING_SCHEDULE: &[(&str, &str, &str, &str)] = &[
    ("1", "200-300°F", "2-3 hours", "Low flame, doors open"),
    ("2", "400-500°F", "2-3 hours", "Doors cracked"),
    ("3", "700-800°F", "2-3 hours", "Doors partially closed"),
    ("4", "1000-1200°F", "2-3 hours", "Normal operation"),
    ("5+", "Full heat", "As needed", "Ready for use"),
];

pub const CURING_NOTE: &str = "Steam escaping during initial cures is normal. Cracking sounds may \
occur. Do NOT rush the curing process.";

pub const STARTUP_STEPS: &[&str] = &[
    "Inspect forge and gas connections (leak test if needed)",
    "Ensure fire extinguisher is within reach",
    "Clear area of combustibles",
    "Position doors for desired opening",
    "Open air gate valve fully",
    "Turn on blower, wait 10-15 seconds",
    "Open main gas ball valve",
    "Slowly open needle valve",
    "Ignite at door opening with long lighter or torch",
    "Adjust gas for desired heat",
    "Fine-tune air for proper flame",
];

pub const SHUTDOWN_STEPS: &[&str] = &[
    "Close gas needle valve",
    "Close main gas ball valve",
    "Keep blower running 60 seconds (purge chamber)",
    "Turn off blower",
    "Leave doors cracked until cool (thermal shock prevention)",
    "Never move forge while hot",
];

pub const FLAME_INTRO: &str = "Proper flame tuning is essential for efficient operation and \
quality work. The air-to-fuel ratio determines the forge atmosphere.";

/// (flame, appearance, use)
pub const FLAME_TYPES: &[(&str, &str, &str)] = &[
    ("Neutral", "Short blue cones, purple tips", "General forging"),
    ("Reducing", "Longer flames, orange/yellow streaks", "Forge welding, minimizes scale"),
    ("Oxidizing", "Short, loud, hissing blue", "Maximum heat (causes heavy scale)"),
];

/// (symptom, adjustment)
pub const TUNING_ADJUSTMENTS: &[(&str, &str)] = &[
    ("Too much scale on steel", "Reduce air (more reducing atmosphere)"),
    ("Not reaching temperature", "Increase gas, close doors more"),
    ("Flame blowing out", "Reduce both air and gas, let forge warm up"),
    ("Loud roaring/hissing", "Too much air, reduce blower speed"),
    ("Lazy, yellow flames", "Not enough air, increase blower"),
];

/// (problem, causes, solutions)
pub const TROUBLESHOOTING: &[(&str, &str, &str)] = &[
    ("Won't ignite", "No gas, no spark, wrong air/gas", "Check gas valve, test igniter, reduce air"),
    ("Flame blows out", "Too much air, forge cold", "Reduce air, preheat with low flame"),
    ("Won't reach temp", "Gas leak, poor insulation, doors open", "Leak test, check blanket, close doors"),
    ("Uneven heating", "Blocked holes, burner angle", "Clear holes, adjust mount angle"),
    ("Excessive scale", "Oxidizing atmosphere", "Reduce air, increase gas slightly"),
    ("High fuel use", "Gas leak, damaged insulation", "Leak test, inspect/repair lining"),
    ("Door binding", "Scale buildup, track bent", "Clean track, check alignment"),
    ("Bolts loosening", "Thermal cycling", "Use lock washers, retorque after cures"),
    ("Smoke from chamber", "Contamination, flux residue", "Clean chamber, normal with flux"),
    ("Blower overheating", "Blocked inlet, undersized", "Clear obstructions, check CFM rating"),
];

/// (interval, tasks)
pub const MAINTENANCE_SCHEDULE: &[(&str, &[&str])] = &[
    (
        "After Each Use",
        &[
            "Visual inspection of chamber for damage",
            "Remove scale and debris from floor",
            "Check door operation",
        ],
    ),
    (
        "Monthly (Heavy Use)",
        &[
            "Check all bolt tightness",
            "Inspect door firebricks for cracks",
            "Clean sliding tracks",
            "Leak test gas connections",
        ],
    ),
    (
        "Quarterly",
        &[
            "Inspect ceramic blanket condition",
            "Check burner holes for blockage",
            "Inspect refractory floor for wear",
            "Clean blower intake filter",
        ],
    ),
    (
        "Annually",
        &[
            "Disassemble top panel, full chamber inspection",
            "Replace damaged refractory",
            "Reapply rigidizer to worn areas",
            "Replace door firebricks if needed",
            "Deep clean entire forge",
        ],
    ),
];

/// Expected performance rows; the even heating zone row is inserted from the design
pub const PERFORMANCE_BEFORE_ZONE: &[(&str, &str)] = &[
    ("Heat-up Time", "10-15 minutes to 2000°F"),
    ("Maximum Temperature", "2400-2500°F (forge welding heat)"),
];

pub const PERFORMANCE_AFTER_ZONE: &[(&str, &str)] = &[
    ("Operating Pressure", "5-10 PSI propane"),
    ("Operating Cost", "~$1-3/hour (varies with propane prices)"),
];
