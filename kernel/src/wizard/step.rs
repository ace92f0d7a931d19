use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum WizardStep {
    Classification,
    Bibliography,
    Upload,
}

impl WizardStep {
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Classification => 1,
            WizardStep::Bibliography => 2,
            WizardStep::Upload => 3,
        }
    }

    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Classification => Some(WizardStep::Bibliography),
            WizardStep::Bibliography => Some(WizardStep::Upload),
            WizardStep::Upload => None,
        }
    }

    pub fn previous(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Classification => None,
            WizardStep::Bibliography => Some(WizardStep::Classification),
            WizardStep::Upload => Some(WizardStep::Bibliography),
        }
    }
}

impl Display for WizardStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            WizardStep::Classification => write!(f, "step 1 (classification)"),
            WizardStep::Bibliography => write!(f, "step 2 (bibliography)"),
            WizardStep::Upload => write!(f, "step 3 (upload)"),
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Guard {
    Always,
    ClassificationComplete,
    BibliographyComplete,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Transition {
    pub from: WizardStep,
    pub to: WizardStep,
    pub guard: Guard,
}

/// Every move the wizard allows. Anything not listed (skipping a step in
/// either direction) does not exist.
pub const TRANSITIONS: [Transition; 4] = [
    Transition {
        from: WizardStep::Classification,
        to: WizardStep::Bibliography,
        guard: Guard::ClassificationComplete,
    },
    Transition {
        from: WizardStep::Bibliography,
        to: WizardStep::Upload,
        guard: Guard::BibliographyComplete,
    },
    Transition {
        from: WizardStep::Bibliography,
        to: WizardStep::Classification,
        guard: Guard::Always,
    },
    Transition {
        from: WizardStep::Upload,
        to: WizardStep::Bibliography,
        guard: Guard::Always,
    },
];

pub fn find_transition(from: WizardStep, to: WizardStep) -> Option<&'static Transition> {
    TRANSITIONS
        .iter()
        .find(|transition| transition.from == from && transition.to == to)
}
