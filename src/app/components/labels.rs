use gettextrs::*;

lazy_static! {
    // translators: Shown on the restaurant list when the user refused to share their location.
    pub static ref NO_LOCATION_PERMISSION: String = gettext("No location permission");

    // translators: Shown on the restaurant list when nothing could be found around the user.
    pub static ref NO_RESTAURANTS: String = gettext("No restaurants found");

    // translators: Shown at the top of the restaurant list while more restaurants are being loaded.
    pub static ref LOADING: String = gettext("Loading…");
}

pub fn n_restaurants_label(n: usize) -> String {
    // this is just to fool xgettext, it doesn't like macros (or rust for that matter) :(
    if cfg!(debug_assertions) {
        // translators: Summary line of the restaurant list.
        ngettext("{} restaurant", "{} restaurants", n as u32);
    }
    ngettext!("{} restaurant", "{} restaurants", n as u32, n)
}
