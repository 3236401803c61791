pub const NAV_ID: &str = "nav";
pub const BURGER_ID: &str = "navBurger";
pub const MOBILE_NAV_ID: &str = "navMobile";
pub const CONFIG_ELEMENT_ID: &str = "cinemawords-config";

pub const REVEAL_SELECTOR: &str = ".reveal";
pub const RATING_FILL_SELECTOR: &str = ".rating-bar__fill";
pub const HERO_HEADLINE_SELECTOR: &str = ".hero__headline";
pub const MESSAGE_SELECTOR: &str = ".message";
pub const INTERACTIVE_SELECTOR: &str = "a, button, input, textarea, select";

pub const SCROLLED_CLASS: &str = "scrolled";
pub const OPEN_CLASS: &str = "open";
pub const VISIBLE_CLASS: &str = "visible";

pub const ARIA_EXPANDED: &str = "aria-expanded";

pub const FINE_POINTER_QUERY: &str = "(pointer: fine)";
