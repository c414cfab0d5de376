use std::rc::Rc;

use serde::{Deserialize, Serialize};
use yew::Reducible;

use crate::shop::pricing::{compute_total, Amount, PackageTier};

/// Query string carried from the upload flow to `/checkout`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CheckoutQuery {
    pub images: u32,
}

/// Reads the `images` query parameter. `None` sends the visitor back to the
/// upload flow.
pub fn parse_image_count(param: Option<&str>) -> Option<u32> {
    param?.trim().parse::<u32>().ok()
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrderDraft {
    pub image_count: u32,
    pub tier: PackageTier,
}

impl OrderDraft {
    pub fn new(image_count: u32) -> Self {
        Self {
            image_count,
            tier: PackageTier::default(),
        }
    }

    pub fn total(&self) -> Amount {
        compute_total(self.tier, self.image_count)
    }
}

pub enum OrderAction {
    SelectTier(PackageTier),
    SetImageCount(u32),
}

impl Reducible for OrderDraft {
    type Action = OrderAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            OrderAction::SelectTier(tier) => Rc::new(OrderDraft {
                tier,
                ..(*self).clone()
            }),
            OrderAction::SetImageCount(image_count) => Rc::new(OrderDraft {
                image_count,
                ..(*self).clone()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_count_param_must_be_a_number() {
        assert_eq!(parse_image_count(Some("42")), Some(42));
        assert_eq!(parse_image_count(Some(" 7 ")), Some(7));
        assert_eq!(parse_image_count(Some("")), None);
        assert_eq!(parse_image_count(Some("-3")), None);
        assert_eq!(parse_image_count(Some("lots")), None);
        assert_eq!(parse_image_count(None), None);
    }

    #[test]
    fn new_draft_starts_on_premium() {
        let draft = OrderDraft::new(10);
        assert_eq!(draft.tier, PackageTier::Premium);
        assert_eq!(draft.total().to_string(), "24.99");
    }

    #[test]
    fn total_follows_tier_changes() {
        let draft = Rc::new(OrderDraft::new(60));
        assert_eq!(draft.total().to_string(), "32.49");

        let draft = draft.reduce(OrderAction::SelectTier(PackageTier::Basic));
        assert_eq!(draft.total().to_string(), "32.99");

        let draft = draft.reduce(OrderAction::SelectTier(PackageTier::Professional));
        assert_eq!(draft.image_count, 60);
        assert_eq!(draft.total().to_string(), "49.99");
    }

    #[test]
    fn image_count_updates_keep_selected_tier() {
        let draft = Rc::new(OrderDraft::new(0)).reduce(OrderAction::SelectTier(PackageTier::Basic));
        let draft = draft.reduce(OrderAction::SetImageCount(25));
        assert_eq!(draft.tier, PackageTier::Basic);
        assert_eq!(draft.total().to_string(), "15.49");
    }
}
