//! Static guide content for the St. Louis area. Edits to office details or
//! checklist wording land here and nowhere else.

use shared::domain::Office;

/// License offices shown in the locator, in the order they render.
pub fn license_offices() -> Vec<Office> {
    vec![
        Office::new("AFTON (003)", "9513 Gravois Rd, Afton", "(314) 631-1311"),
        Office::new(
            "CENTRAL WEST END (077)",
            "4041 Lindell Blvd, St. Louis",
            "(314) 932-1444",
        ),
        Office::new(
            "CLAYTON (162)",
            "141 N Meramec Ave Ste 201, Clayton",
            "(314) 499-7223",
        ),
        Office::new(
            "FERGUSON (108)",
            "10425 W Florissant Ave, Ferguson",
            "(314) 733-5316",
        ),
        Office::new(
            "OAKVILLE (129)",
            "3164 Telegraph Rd, St. Louis",
            "(314) 887-1050",
        ),
        Office::new(
            "SOUTH KINGSHIGHWAY (042)",
            "4628 S Kingshighway Blvd, St. Louis",
            "(314) 877-1955",
        ),
    ]
}

/// One document the driver should bring, with a stable id for checkbox
/// state tracking.
pub struct ChecklistItem {
    pub id: &'static str,
    pub label: &'static str,
}

pub struct ChecklistSection {
    pub title: &'static str,
    pub items: &'static [ChecklistItem],
}

pub const CHECKLIST_SECTIONS: &[ChecklistSection] = &[
    ChecklistSection {
        title: "Proof of identity",
        items: &[
            ChecklistItem {
                id: "birth-certificate",
                label: "Certified birth certificate or valid U.S. passport",
            },
            ChecklistItem {
                id: "social-security-card",
                label: "Social Security card or W-2 showing your full SSN",
            },
        ],
    },
    ChecklistSection {
        title: "Proof of Missouri residence (two required)",
        items: &[
            ChecklistItem {
                id: "residence-utility-bill",
                label: "Utility bill dated within the last 60 days",
            },
            ChecklistItem {
                id: "residence-bank-statement",
                label: "Bank statement or voter registration card",
            },
        ],
    },
    ChecklistSection {
        title: "At the office",
        items: &[
            ChecklistItem {
                id: "vision-screening",
                label: "Pass the vision and road sign screening",
            },
            ChecklistItem {
                id: "payment",
                label: "Payment for the license fee (card or cash)",
            },
        ],
    },
];

/// Short primer on the written test, shown above the comment board.
pub const TEST_RULES: &[&str] = &[
    "The written test has 25 multiple-choice questions drawn from the Missouri Driver Guide.",
    "You need 20 correct answers (80%) to pass.",
    "Road sign recognition is scored separately and must also be passed.",
    "If you fail, you may retake the test the next business day.",
];
