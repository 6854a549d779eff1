//! # Onboarding & Tutorial
//!
//! Two linear walkthroughs driven by the same [`Stepper`]:
//! - the 4-step onboarding shown right after signup
//! - the 5-tooltip tutorial overlaid on the first visit to home
//!
//! ```text
//!   step 0 ──next──► step 1 ──next──► ... ──next──► last ──next──► Completed
//!          ◄──back──        ◄──back──
//!   skip from any step ──────────────────────────────────────────► Completed
//!   progress dots ──go_to(i)──► step i
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Language;

// =============================================================================
// Stepper
// =============================================================================

/// Result of moving a stepper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "camelCase")]
#[ts(export)]
pub enum StepOutcome {
    /// Now showing this step.
    At { index: usize },
    /// Walked off the end or skipped.
    Completed,
}

/// Position within an N-step walkthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Stepper {
    index: usize,
    len: usize,
    completed: bool,
}

impl Stepper {
    /// A stepper at step 0. `len` is clamped to at least 1.
    pub fn new(len: usize) -> Self {
        Stepper {
            index: 0,
            len: len.max(1),
            completed: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn step_count(&self) -> usize {
        self.len
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// True when "Back" is shown.
    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    /// True on the last step, where "Next" reads "Get Started".
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.len
    }

    fn outcome(&self) -> StepOutcome {
        if self.completed {
            StepOutcome::Completed
        } else {
            StepOutcome::At { index: self.index }
        }
    }

    pub fn next(&mut self) -> StepOutcome {
        if self.is_last() {
            self.completed = true;
        } else if !self.completed {
            self.index += 1;
        }
        self.outcome()
    }

    /// Moves back one step; stays put on step 0.
    pub fn back(&mut self) -> StepOutcome {
        if !self.completed && self.index > 0 {
            self.index -= 1;
        }
        self.outcome()
    }

    pub fn skip(&mut self) -> StepOutcome {
        self.completed = true;
        self.outcome()
    }

    /// Jumps to step `index`; out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) -> StepOutcome {
        if !self.completed && index < self.len {
            self.index = index;
        }
        self.outcome()
    }
}

// =============================================================================
// Onboarding Steps
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OnboardingStep {
    pub title: String,
    pub description: String,
}

pub fn onboarding_steps() -> Vec<OnboardingStep> {
    [
        (
            "Browse & Search",
            "Search for your favorite products and browse through categories easily",
        ),
        (
            "Add to Cart",
            "Add items to your cart and manage quantities with simple controls",
        ),
        (
            "Voice Control",
            "Use voice commands in Urdu to search and add items to your cart",
        ),
        (
            "Track Your Orders",
            "Monitor your current orders and view delivery status in real-time",
        ),
    ]
    .into_iter()
    .map(|(title, description)| OnboardingStep {
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect()
}

// =============================================================================
// Tutorial Tooltips
// =============================================================================

/// Where the tooltip's arrow points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum TooltipArrow {
    Top,
    Bottom,
    BottomRight,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TutorialTip {
    /// Highlighted element: search, categories, voice, cart, personalization.
    pub id: String,
    pub title: String,
    pub description: String,
    pub arrow: TooltipArrow,
}

struct TipText {
    id: &'static str,
    arrow: TooltipArrow,
    english: (&'static str, &'static str),
    urdu: (&'static str, &'static str),
}

const TIPS: [TipText; 5] = [
    TipText {
        id: "search",
        arrow: TooltipArrow::Top,
        english: (
            "Search Products",
            "Click here to search for any product by name, category, or brand. You can filter results and add items directly to cart from search results.",
        ),
        urdu: (
            "پروڈکٹس تلاش کریں",
            "یہاں کلک کر کے آپ کسی بھی پروڈکٹ کو نام، کیٹیگری یا برانڈ سے تلاش کر سکتے ہیں۔ تلاش کے نتائج میں آپ فلٹر لگا سکتے ہیں اور براہ راست کارٹ میں شامل کر سکتے ہیں۔",
        ),
    },
    TipText {
        id: "categories",
        arrow: TooltipArrow::Top,
        english: (
            "Browse Categories",
            "Tap on any category like Meat, Fruits, Vegetables, Dairy, and more. Each category shows all available products that you can add to your cart.",
        ),
        urdu: (
            "کیٹیگریز براؤز کریں",
            "گوشت، پھل، سبزیاں، ڈیری اور دیگر کیٹیگریز میں سے کسی پر بھی ٹیپ کریں۔ ہر کیٹیگری میں آپ کو مختلف پروڈکٹس ملیں گی جن کو آپ اپنے کارٹ میں شامل کر سکتے ہیں۔",
        ),
    },
    TipText {
        id: "voice",
        arrow: TooltipArrow::BottomRight,
        english: (
            "Voice Control",
            "Press this button and speak in Urdu like \"ek kilo aam cart mein dalen\" or \"gosht dikhayein\". You can search products, add to cart, and confirm orders using voice commands only.",
        ),
        urdu: (
            "آواز سے کنٹرول",
            "اس بٹن پر دبائیں اور اردو میں بولیں جیسے \"ایک کلو آم کارٹ میں ڈالیں\" یا \"گوشت دکھائیں\"۔ آپ آواز سے پروڈکٹس تلاش کر سکتے ہیں، کارٹ میں شامل کر سکتے ہیں اور آرڈر کی تصدیق کر سکتے ہیں۔",
        ),
    },
    TipText {
        id: "cart",
        arrow: TooltipArrow::Bottom,
        english: (
            "Your Cart",
            "View your shopping cart here. You can increase/decrease quantities, remove items, and proceed to checkout. Cart shows price breakdown and delivery details.",
        ),
        urdu: (
            "آپ کی کارٹ",
            "یہاں سے اپنی کارٹ دیکھیں۔ آپ تعداد بڑھا یا گھٹا سکتے ہیں، اشیاء ہٹا سکتے ہیں اور چیک آؤٹ کر سکتے ہیں۔ کارٹ میں قیمت کی مکمل تفصیل اور ڈیلیوری کی معلومات ملتی ہیں۔",
        ),
    },
    TipText {
        id: "personalization",
        arrow: TooltipArrow::BottomRight,
        english: (
            "Personalization",
            "Go to Profile to customize settings: change theme (light, dark, colorblind), language (Urdu/English), font size, and icon size. These settings apply across the entire app.",
        ),
        urdu: (
            "ذاتی ترتیبات",
            "پروفائل میں جائیں اور ترتیبات کو اپنی پسند کے مطابق بنائیں: تھیم تبدیل کریں (روشن، تاریک، رنگ اندھا)، زبان (اردو/انگریزی)، فونٹ کا سائز اور آئیکن کا سائز۔ یہ تبدیلیاں پوری ایپ میں لاگو ہوں گی۔",
        ),
    },
];

/// The tutorial tooltips in `language`.
pub fn tutorial_tips(language: Language) -> Vec<TutorialTip> {
    TIPS.iter()
        .map(|tip| {
            let (title, description) = match language {
                Language::English => tip.english,
                Language::Urdu => tip.urdu,
            };
            TutorialTip {
                id: tip.id.to_string(),
                title: title.to_string(),
                description: description.to_string(),
                arrow: tip.arrow,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_walks_to_completion() {
        let mut stepper = Stepper::new(onboarding_steps().len());
        assert_eq!(stepper.next(), StepOutcome::At { index: 1 });
        assert_eq!(stepper.next(), StepOutcome::At { index: 2 });
        assert_eq!(stepper.next(), StepOutcome::At { index: 3 });
        assert!(stepper.is_last());
        assert_eq!(stepper.next(), StepOutcome::Completed);
        assert!(stepper.is_completed());
    }

    #[test]
    fn test_back_stops_at_zero() {
        let mut stepper = Stepper::new(4);
        assert!(!stepper.can_go_back());
        assert_eq!(stepper.back(), StepOutcome::At { index: 0 });
        stepper.go_to(2);
        assert_eq!(stepper.back(), StepOutcome::At { index: 1 });
    }

    #[test]
    fn test_skip_and_go_to() {
        let mut stepper = Stepper::new(5);
        assert_eq!(stepper.go_to(4), StepOutcome::At { index: 4 });
        assert_eq!(stepper.go_to(9), StepOutcome::At { index: 4 });
        assert_eq!(stepper.skip(), StepOutcome::Completed);
        assert_eq!(stepper.go_to(0), StepOutcome::Completed);
    }

    #[test]
    fn test_tables() {
        assert_eq!(onboarding_steps()[2].title, "Voice Control");

        let english = tutorial_tips(Language::English);
        let ids: Vec<&str> = english.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["search", "categories", "voice", "cart", "personalization"]);

        let urdu = tutorial_tips(Language::Urdu);
        assert_eq!(urdu[3].title, "آپ کی کارٹ");
        assert_eq!(urdu[2].arrow, TooltipArrow::BottomRight);
    }
}
