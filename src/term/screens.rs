//! Static pages and menus. Each function draws one screen onto a `Renderer`.

use crate::core::catalog::{Catalog, Category};
use crate::core::render::{Renderer, Tone};
use crate::core::state::NavState;

pub const ACK_PROMPT: &str = "\nPress Enter to continue...";
pub const FAREWELL: &str = "Thank you for learning about interfaces and enums. Happy coding!";
pub const COMPLETION: &str = "\nCongratulations! You've completed all the tutorials.";

pub fn welcome(out: &mut dyn Renderer) {
    out.clear();
    out.title("Welcome to the Interface & Enum Explorer", Tone::Welcome);
    out.line("This interactive tool will help you learn about traits (Rust's interfaces) and enums.");
    out.line("You'll see examples ranging from basic concepts to advanced usage patterns.");
    out.line("\nEach example includes:");
    out.line("- Explanation of the concept");
    out.line("- Sample code with comments");
    out.line("- Output of the code execution");
    out.line("\nLet's begin exploring traits and enum patterns!");
}

pub fn help(out: &mut dyn Renderer) {
    out.clear();
    out.title("Help", Tone::Help);

    out.line("How to use this tool:");
    out.line("1. Tutorial Mode: Guides you through all examples in a logical order.");
    out.line("2. Browse Examples: Pick specific topics you're interested in.");

    out.line("\nAbout interfaces (traits):");
    out.line("- A trait defines behavior, not structure.");
    out.line("- Types opt in with an explicit `impl Trait for Type` block.");
    out.line("- Traits can require other traits (supertraits).");
    out.line("- `dyn Any` can hold a value of any 'static type and be downcast later.");

    out.line("\nAbout enums:");
    out.line("- Enums are real sum types: each variant can carry its own data.");
    out.line("- Fieldless variants can be given explicit integer discriminants.");
    out.line("- `Display` and `FromStr` give enums string representations.");
    out.line("- Enums can have methods, so behavior lives next to the variants.");

    out.line("\nTip: Running the examples and reviewing the code is the best way to learn!");
}

/// The menu shown while waiting for a token in `state`.
pub fn menu_for(state: &NavState, catalog: &Catalog, out: &mut dyn Renderer) {
    match state {
        NavState::Root => main_menu(out),
        NavState::TutorialAt(_) => tutorial_options(out),
        NavState::BrowseCategoryMenu => category_menu(catalog, out),
        NavState::BrowseTopicMenu(id) => match catalog.category(id) {
            Ok(category) => topic_menu(category, out),
            // only "b" leaves; anything else is reported in place
            Err(e) => {
                out.line(&e.to_string());
                out.prompt("\nPress 'b' to go back: ");
            }
        },
    }
}

fn main_menu(out: &mut dyn Renderer) {
    out.clear();
    out.title("Main Menu", Tone::Menu);
    out.line("1. Start Tutorial (guided journey)");
    out.line("2. Browse Examples (pick specific topics)");
    out.line("3. Help");
    out.line("q. Quit");
    out.prompt("\nEnter your choice (or 'q' to quit): ");
}

fn tutorial_options(out: &mut dyn Renderer) {
    out.line("\nOptions:");
    out.line("n - Next example");
    out.line("m - Return to main menu");
    out.prompt("\nYour choice: ");
}

fn category_menu(catalog: &Catalog, out: &mut dyn Renderer) {
    out.clear();
    out.title("Browse Examples", Tone::Browse);
    out.line("Categories:");
    for (i, category) in catalog.categories().iter().enumerate() {
        out.line(&format!("{}. {}", i + 1, category.title));
    }
    out.line("b. Back to Main Menu");
    out.prompt("\nSelect a category (or 'b' to go back): ");
}

fn topic_menu(category: &Category, out: &mut dyn Renderer) {
    out.clear();
    out.title(&format!("{} Examples", category.title), Tone::Browse);
    for (i, topic) in category.topics.iter().enumerate() {
        out.line(&format!("{}. {}", i + 1, topic));
    }
    out.line("b. Back to Categories");
    out.prompt("\nSelect an example (or 'b' to go back): ");
}

/// Full catalog listing for `--list`.
pub fn listing(catalog: &Catalog, out: &mut dyn Renderer) {
    for (i, category) in catalog.categories().iter().enumerate() {
        out.line(&format!("{}. {} ({})", i + 1, category.title, category.id));
        for (j, topic) in category.topics.iter().enumerate() {
            out.line(&format!("   {}. {}", j + 1, topic));
        }
    }
}
