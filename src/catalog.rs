//! Static menu, subscription plans and FAQ shown on the landing page.
//!
//! This is read-only reference data. The AI features only use it to build
//! prompt context.

use serde::Serialize;

use crate::entity::normalize_choice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub name: &'static str,
    pub description: &'static str,
    /// Price in whole rupees.
    pub price: u32,
    pub tags: &'static [&'static str],
    pub badge: Option<&'static str>,
    pub nutrition: &'static str,
}

impl MenuItem {
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = normalize_choice(tag);
        self.tags.iter().any(|t| normalize_choice(t) == wanted)
    }
}

pub const MENU: &[MenuItem] = &[
    MenuItem {
        name: "High Protein Egg Chicken Meal",
        description: "Grilled chicken with boiled eggs and seasonal vegetables.",
        price: 349,
        tags: &["high-protein", "keto"],
        badge: Some("Chef's Pick"),
        nutrition: "Calories: 450, Protein: 40g, Carbs: 10g, Fat: 28g",
    },
    MenuItem {
        name: "Dry Fruit Chia Pudding",
        description: "Chia seeds, assorted dry fruits and natural sweeteners.",
        price: 319,
        tags: &["vegetarian"],
        badge: Some("Healthy Start"),
        nutrition: "Calories: 350, Protein: 10g, Carbs: 45g, Fat: 15g",
    },
    MenuItem {
        name: "Premium Chicken Pink Pasta",
        description: "Creamy pink sauce with tender chicken and fresh herbs.",
        price: 459,
        tags: &["high-protein"],
        badge: Some("Indulgent"),
        nutrition: "Calories: 550, Protein: 35g, Carbs: 50g, Fat: 25g",
    },
    MenuItem {
        name: "Chickpea Feta Avocado Bowl",
        description: "A refreshing Mediterranean-inspired bowl.",
        price: 369,
        tags: &["vegetarian", "new-item"],
        badge: Some("New Item"),
        nutrition: "Calories: 420, Protein: 15g, Carbs: 40g, Fat: 22g",
    },
    MenuItem {
        name: "Protein Scramble Rice Bowl",
        description: "Scrambled eggs, veggie rice, and juicy chicken breast.",
        price: 349,
        tags: &["high-protein"],
        badge: None,
        nutrition: "Calories: 480, Protein: 38g, Carbs: 30g, Fat: 24g",
    },
    MenuItem {
        name: "Dry Fruit Whey Protein Shake",
        description: "A powerhouse shake with whey protein, almonds, and more.",
        price: 269,
        tags: &["high-protein", "keto"],
        badge: Some("Healthy Boost"),
        nutrition: "Calories: 380, Protein: 25g, Carbs: 30g, Fat: 18g",
    },
];

/// Kitchen dishes the meal planner may suggest that are not listed for
/// direct ordering.
pub const PLANNER_ONLY_DISHES: &[&str] = &[
    "Quinoa Power Bowl with Grilled Paneer",
    "Spicy Tofu Stir-fry with Brown Rice",
    "Salmon and Asparagus Medley",
    "Millet Upma with Vegetables",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlan {
    pub name: &'static str,
    /// `None` for custom-priced plans.
    pub price: Option<u32>,
    pub period: &'static str,
    pub meals: &'static str,
    pub pitch: &'static str,
}

pub const PLANS: &[SubscriptionPlan] = &[
    SubscriptionPlan {
        name: "Weekly Warrior",
        price: Some(1799),
        period: "week",
        meals: "5 meals",
        pitch: "Good for trying us out.",
    },
    SubscriptionPlan {
        name: "Monthly Motivator",
        price: Some(6499),
        period: "month",
        meals: "20 meals",
        pitch: "Best value and savings. You can pause or resume anytime.",
    },
    SubscriptionPlan {
        name: "Corporate Fuel",
        price: None,
        period: "custom",
        meals: "teams of 10+",
        pitch: "Custom pricing for teams.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "How does Taazabites ensure meal freshness?",
        answer: "We prepare all meals daily using locally sourced ingredients and deliver in temperature-controlled packaging to maintain freshness and nutritional value.",
    },
    FaqEntry {
        question: "Do you accommodate dietary restrictions?",
        answer: "Yes! We offer vegetarian, vegan, gluten-free, and keto options. Please specify your requirements when ordering.",
    },
    FaqEntry {
        question: "What areas in Bangalore do you deliver to?",
        answer: "We currently deliver to all major areas of Bangalore including Whitefield, Indiranagar, Koramangala, HSR Layout, and surrounding regions.",
    },
    FaqEntry {
        question: "How far in advance should I place my order?",
        answer: "We recommend ordering at least 4 hours in advance for same-day delivery. For larger orders or catering, please order 24 hours ahead.",
    },
];

/// Menu items carrying `tag`. `None` or `"all"` returns the whole menu.
pub fn filter_menu(tag: Option<&str>) -> Vec<&'static MenuItem> {
    match tag.map(str::trim) {
        None | Some("") => MENU.iter().collect(),
        Some(t) if t.eq_ignore_ascii_case("all") => MENU.iter().collect(),
        Some(t) => MENU.iter().filter(|item| item.has_tag(t)).collect(),
    }
}

/// Case-insensitive lookup by dish name.
pub fn find_dish(name: &str) -> Option<&'static MenuItem> {
    let wanted = name.trim();
    MENU.iter().find(|item| item.name.eq_ignore_ascii_case(wanted))
}

/// Rupee amount with Indian digit grouping.
pub fn format_price(rupees: u32) -> String {
    let digits = rupees.to_string();
    if digits.len() <= 3 {
        return format!("₹{}", digits);
    }
    // Indian grouping: last three digits, then pairs
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (h, t) = rest.split_at(rest.len() - 2);
        groups.push(t);
        rest = h;
    }
    groups.push(rest);
    groups.reverse();
    format!("₹{},{}", groups.join(","), tail)
}

/// Comma-separated dish names the meal planner may choose from.
pub fn planner_menu() -> String {
    MENU.iter()
        .map(|item| item.name)
        .chain(PLANNER_ONLY_DISHES.iter().copied())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Company knowledge the FAQ search answers from.
pub fn search_context() -> String {
    let mut out = String::new();

    out.push_str("**About Taazabites:**\n");
    out.push_str(
        "Taazabites is a premium healthy food delivery service in Bangalore. Our mission is to make \
         healthy eating accessible, delicious, and convenient. Our meals are created by a team of chefs \
         and nutritionists. We are committed to sustainability and source locally. We have served over \
         25,000 meals with a 98% satisfaction rate.\n\n",
    );

    out.push_str("**Menu Items:**\n");
    for item in MENU {
        out.push_str(&format!(
            "- {} ({}) {}: {} [{}]\n",
            item.name,
            item.tags.join(", "),
            format_price(item.price),
            item.description,
            item.nutrition
        ));
    }

    out.push_str("\n**Subscription Plans:**\n");
    for plan in PLANS {
        let price = match plan.price {
            Some(p) => format!("{}/{}", format_price(p), plan.period),
            None => "Custom pricing".to_string(),
        };
        out.push_str(&format!(
            "- {}: {} for {}. {}\n",
            plan.name, price, plan.meals, plan.pitch
        ));
    }

    out.push_str(
        "\n**Corporate Services:**\n\
         We offer customized meal plans for corporate teams in Bangalore. We provide flexible delivery, \
         dedicated account managers, and custom budgeting.\n\n\
         **Delivery & Ordering:**\n\
         We deliver to all major areas of Bangalore. Orders should be placed 4 hours in advance for \
         same-day delivery.\n\n\
         **Dietary Information:**\n\
         We accommodate various dietary needs including Vegetarian, Keto, and High-Protein. Customers \
         can specify dislikes and allergies.\n\n",
    );

    out.push_str("**Frequently Asked Questions:**\n");
    for entry in FAQ {
        out.push_str(&format!("Q: {}\nA: {}\n", entry.question, entry.answer));
    }

    out
}
