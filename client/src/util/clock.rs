//! Today's calendar date from the host environment.
//!
//! `time`'s clock queries are unavailable on `wasm32-unknown-unknown`, so the
//! hydrated client asks the JS `Date` API. Server renders fall back to the
//! Unix epoch; hydration replaces the value before the user can interact.

/// The current local calendar date.
#[must_use]
pub fn today() -> time::Date {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        let year = i32::try_from(now.get_full_year()).unwrap_or(1970);
        // JS months are zero-based.
        let month = u8::try_from(now.get_month() + 1).unwrap_or(1);
        let day = u8::try_from(now.get_date()).unwrap_or(1);
        time::Month::try_from(month)
            .ok()
            .and_then(|month| time::Date::from_calendar_date(year, month, day).ok())
            .unwrap_or(time::OffsetDateTime::UNIX_EPOCH.date())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::UNIX_EPOCH.date()
    }
}
