mod cursor;
mod dom;
mod hero;
mod messages;
mod mobile_nav;
mod page;
mod page_config;
mod rating_bar;
mod reveal;
mod scroll_nav;

fn main() {
    page::install();
}
