//! Follow-up question templates per system.

/// Used for systems without their own table, and for padding.
pub const GENERAL_QUESTIONS: &[&str] = &[
    "Can you describe where the noise is coming from?",
    "When did you first notice this issue?",
    "Does the problem occur at specific speeds or conditions?",
];

const SYSTEM_QUESTIONS: &[(&str, &[&str])] = &[
    (
        "POWERTRAIN",
        &[
            "Does the issue occur when the engine is cold or warm?",
            "Do you notice any warning lights on the dashboard?",
            "Is there any unusual smell (burning, fuel)?",
        ],
    ),
    (
        "ELECTRICAL",
        &[
            "Does this happen consistently or intermittently?",
            "Have you noticed any dim lights or electrical issues?",
            "How old is the battery?",
        ],
    ),
    (
        "HVAC",
        &[
            "Does the air blow but not cold, or no air at all?",
            "Do you hear any unusual noises from the AC?",
            "Has the AC worked properly recently?",
        ],
    ),
    (
        "BRAKES",
        &[
            "Does the noise happen only when braking or always?",
            "Do you feel vibration in the steering wheel or pedal?",
            "When were the brake pads last replaced?",
        ],
    ),
    (
        "SUSPENSION",
        &[
            "Is the noise from the front or rear of the vehicle?",
            "Does it happen on all road conditions or just bumps?",
            "Have you noticed uneven tire wear?",
        ],
    ),
    (
        "STEERING",
        &[
            "Is the steering wheel shaking or hard to turn?",
            "Do you notice fluid under the car?",
            "Does it pull to one side while driving?",
        ],
    ),
    (
        "EXHAUST",
        &[
            "Is the noise coming from under the car?",
            "Do you smell exhaust or rotten eggs?",
            "Is the check engine light on?",
        ],
    ),
    (
        "TIRES_WHEELS",
        &[
            "Which tire is affected (front/rear, left/right)?",
            "Is the TPMS warning light on?",
            "Did you hit a pothole or curb recently?",
        ],
    ),
];

/// Questions for `system`, or the general table when it has none.
pub fn questions_for(system: &str) -> &'static [&'static str] {
    SYSTEM_QUESTIONS
        .iter()
        .find(|(s, _)| *s == system)
        .map(|(_, q)| *q)
        .unwrap_or(GENERAL_QUESTIONS)
}
