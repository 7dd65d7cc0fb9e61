use chrono::TimeZone;

use datefmt_rs::formatter::calendar::{
    day_of_year, days_in_month, is_leap_year, iso_week, iso_week_year, iso_weekday, weekday,
};
use datefmt_rs::{
    FormatterOptions, LocaleError, LocaleSettings, Moment, ZoneInfo, add_locale, format,
    format_with_options,
};

#[test]
fn leap_year_follows_the_gregorian_rule() {
    assert!(is_leap_year(2000));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2019));
    assert!(is_leap_year(2020));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(2100));
}

#[test]
fn days_in_month_by_month() {
    assert_eq!(days_in_month(2, 2020), 29);
    assert_eq!(days_in_month(2, 2019), 28);
    for month in [4, 6, 9, 11] {
        assert_eq!(days_in_month(month, 2021), 30, "month {month}");
    }
    for month in [1, 3, 5, 7, 8, 10, 12] {
        assert_eq!(days_in_month(month, 2021), 31, "month {month}");
    }
}

#[test]
fn day_of_year_is_zero_based() {
    assert_eq!(day_of_year(2018, 1, 1), 0);
    assert_eq!(day_of_year(2019, 12, 31), 364);
    assert_eq!(day_of_year(2020, 12, 31), 365);
    assert_eq!(day_of_year(2020, 3, 1), 60);
}

#[test]
fn weekday_numbers() {
    // 2018-07-09 was a Monday.
    assert_eq!(weekday(2018, 7, 9), 1);
    assert_eq!(iso_weekday(2018, 7, 9), 1);
    // 2023-01-01 was a Sunday.
    assert_eq!(weekday(2023, 1, 1), 0);
    assert_eq!(iso_weekday(2023, 1, 1), 7);
}

#[test]
fn iso_week_at_the_end_of_year_boundary() {
    // 2018-12-31 (a Monday) belongs to week 1 of ISO year 2019.
    assert_eq!(iso_week(2018, 12, 31), 1);
    assert_eq!(iso_week_year(2018, 12, 31), 2019);
}

#[test]
fn iso_week_at_the_start_of_year_boundary() {
    // 2023-01-01 (a Sunday) belongs to the last ISO week of 2022.
    assert_eq!(iso_week(2023, 1, 1), 52);
    assert_eq!(iso_week_year(2023, 1, 1), 2022);
}

#[test]
fn iso_week_mid_year_is_unshifted() {
    assert_eq!(iso_week(2018, 7, 9), 28);
    assert_eq!(iso_week_year(2018, 7, 9), 2018);
}

#[test]
fn format_date_and_time() {
    let moment = Moment::new(2018, 7, 9).with_time(15, 33, 24);
    assert_eq!(format("Y-m-d H:i:s", &moment), "2018-07-09 15:33:24");
}

#[test]
fn format_week_boundary_tokens() {
    let moment = Moment::new(2018, 12, 31);
    assert_eq!(format("Y", &moment), "2018");
    assert_eq!(format("W", &moment), "01");
    assert_eq!(format("o", &moment), "2019");
    assert_eq!(format("N", &moment), "1");

    let moment = Moment::new(2023, 1, 1);
    assert_eq!(format("N", &moment), "7");
    assert_eq!(format("w", &moment), "0");
    assert_eq!(format("W", &moment), "52");
    assert_eq!(format("o", &moment), "2022");
}

#[test]
fn ordinal_suffixes() {
    for (day, expected) in [
        (1, "1st"),
        (2, "2nd"),
        (3, "3rd"),
        (4, "4th"),
        (11, "11th"),
        (13, "13th"),
        (21, "21st"),
        (22, "22nd"),
        (23, "23rd"),
        (31, "31st"),
    ] {
        let moment = Moment::new(2018, 8, day);
        assert_eq!(format("jS", &moment), expected);
    }
}

#[test]
fn escape_emits_the_literal_character() {
    let moment = Moment::new(2018, 7, 9);
    assert_eq!(format("\\Y", &moment), "Y");
    assert_eq!(format("Y \\a\\n\\d m", &moment), "2018 and 07");
}

#[test]
fn unknown_characters_pass_through() {
    let moment = Moment::new(2018, 7, 9);
    assert_eq!(format("Y?x", &moment), "2018?x");
}

#[test]
fn weekday_and_month_name_tokens() {
    let moment = Moment::new(2018, 7, 9);
    assert_eq!(format("l", &moment), "Monday");
    assert_eq!(format("D", &moment), "Mon");
    assert_eq!(format("F", &moment), "July");
    assert_eq!(format("M", &moment), "Jul");
    assert_eq!(format("n", &moment), "7");
    assert_eq!(format("m", &moment), "07");
}

#[test]
fn year_tokens() {
    assert_eq!(format("y", &Moment::new(2003, 1, 1)), "03");
    assert_eq!(format("y", &Moment::new(1999, 1, 1)), "99");
    assert_eq!(format("L t", &Moment::new(2020, 2, 5)), "1 29");
    assert_eq!(format("L t", &Moment::new(2019, 2, 5)), "0 28");
}

#[test]
fn hour_tokens() {
    let midnight = Moment::new(2018, 7, 9);
    assert_eq!(format("g G h H a A", &midnight), "12 0 12 00 am AM");

    let afternoon = Moment::new(2018, 7, 9).with_time(15, 4, 5);
    assert_eq!(format("g G h H a A", &afternoon), "3 15 03 15 pm PM");
}

#[test]
fn millisecond_and_microsecond_tokens() {
    let moment = Moment::new(2018, 7, 9).with_millisecond(7);
    assert_eq!(format("v", &moment), "007");
    assert_eq!(format("u", &moment), "007000");

    let moment = Moment::new(2018, 7, 9).with_millisecond(654);
    assert_eq!(format("u", &moment), "654000");
}

#[test]
fn swatch_beats_wrap_at_midnight_utc_plus_one() {
    assert_eq!(format("B", &Moment::new(1970, 1, 1)), "041");
    let late = Moment::new(1999, 10, 23).with_time(23, 0, 0);
    assert_eq!(format("B", &late), "000");
    // Local offsets do not shift the beat.
    let shifted = Moment::new(1970, 1, 1).with_time(1, 0, 0).with_offset(60);
    assert_eq!(format("B", &shifted), "041");
}

#[test]
fn offset_tokens() {
    let east = Moment::new(2020, 1, 15).with_offset(330);
    assert_eq!(format("P", &east), "+05:30");
    assert_eq!(format("O", &east), "+0530");
    assert_eq!(format("Z", &east), "19800");

    let west = Moment::new(2020, 1, 15).with_offset(-270);
    assert_eq!(format("P", &west), "-04:30");
    assert_eq!(format("O", &west), "-0430");
    assert_eq!(format("Z", &west), "-16200");

    let utc = Moment::new(2020, 1, 15);
    assert_eq!(format("P", &utc), "+00:00");
}

#[test]
fn zone_abbreviation_falls_back_to_the_offset() {
    assert_eq!(format("T", &Moment::new(2020, 1, 15)), "UTC");
    assert_eq!(format("T", &Moment::new(2020, 1, 15).with_offset(120)), "GMT+2");
    assert_eq!(format("T", &Moment::new(2020, 1, 15).with_offset(330)), "GMT+5:30");
    assert_eq!(format("T", &Moment::new(2020, 1, 15).with_offset(-210)), "GMT-3:30");

    let named = Moment::new(2020, 7, 15).with_offset(120).with_zone(ZoneInfo {
        abbreviation: Some("CEST".to_string()),
        ..ZoneInfo::default()
    });
    assert_eq!(format("T", &named), "CEST");
}

#[test]
fn zone_identifier_falls_back_to_the_abbreviation() {
    let berlin = Moment::new(2020, 7, 15).with_offset(120).with_zone(ZoneInfo {
        id: Some("Europe/Berlin".to_string()),
        ..ZoneInfo::default()
    });
    assert_eq!(format("e", &berlin), "Europe/Berlin");
    assert_eq!(format("e", &Moment::new(2020, 1, 15)), "UTC");
}

#[test]
fn dst_flag_compares_against_the_summer_offset() {
    let zone = ZoneInfo {
        january_offset: Some(60),
        july_offset: Some(120),
        ..ZoneInfo::default()
    };
    let summer = Moment::new(2020, 7, 15).with_offset(120).with_zone(zone.clone());
    assert_eq!(format("I", &summer), "1");
    let winter = Moment::new(2020, 1, 15).with_offset(60).with_zone(zone);
    assert_eq!(format("I", &winter), "0");

    // Southern hemisphere: January carries the larger offset.
    let southern = ZoneInfo {
        january_offset: Some(660),
        july_offset: Some(600),
        ..ZoneInfo::default()
    };
    let sydney_summer = Moment::new(2020, 1, 15).with_offset(660).with_zone(southern);
    assert_eq!(format("I", &sydney_summer), "1");

    // No observed change, no DST.
    assert_eq!(format("I", &Moment::new(2020, 7, 15).with_offset(60)), "0");
}

#[test]
fn iso_8601_composite_token() {
    let moment = Moment::new(2004, 2, 12).with_time(15, 19, 21);
    assert_eq!(format("c", &moment), "2004-02-12T15:19:21+00:00");
    // Stable across repeated calls.
    assert_eq!(format("c", &moment), format("c", &moment));
    // The composite equals its expanded pattern.
    assert_eq!(format("c", &moment), format("Y-m-d\\TH:i:sP", &moment));
}

#[test]
fn rfc_2822_composite_token() {
    let moment = Moment::new(2000, 12, 21).with_time(16, 1, 7).with_offset(120);
    assert_eq!(format("r", &moment), "Thu, 21 Dec 2000 16:01:07 +0200");
}

#[test]
fn epoch_token_round_trips() {
    let moment = Moment::from_epoch_millis(1_276_782_742_000);
    assert_eq!(format("U", &moment), "1276782742");
    assert_eq!(format("Y-m-d H:i:s", &moment), "2010-06-17 13:52:22");

    let seconds: i64 = format("U", &moment).parse().expect("epoch seconds");
    let again = Moment::from_epoch_millis(seconds * 1_000);
    assert_eq!(format("U", &again), "1276782742");
}

#[test]
fn epoch_token_accounts_for_the_offset() {
    let moment = Moment::new(1970, 1, 1).with_time(1, 0, 0).with_offset(60);
    assert_eq!(format("U", &moment), "0");
    assert_eq!(format("U", &Moment::new(1970, 1, 1)), "0");
}

#[test]
fn builtin_locales_translate_names() {
    let moment = Moment::new(2018, 7, 9);
    let output = format_with_options("l", &moment, FormatterOptions::default().with_locale("de"));
    assert_eq!(output, "Montag");
    // Territory variants resolve to the bare language.
    let output = format_with_options(
        "l, j. F",
        &moment,
        FormatterOptions::default().with_locale("de-DE"),
    );
    assert_eq!(output, "Montag, 9. Juli");
    // Abbreviations are character-based, not byte-based.
    let march = Moment::new(2021, 3, 8);
    let output = format_with_options("M", &march, FormatterOptions::default().with_locale("de"));
    assert_eq!(output, "Mär");
}

#[test]
fn unknown_locale_falls_back_to_english() {
    let moment = Moment::new(2018, 7, 9);
    let output = format_with_options("l", &moment, FormatterOptions::default().with_locale("zz"));
    assert_eq!(output, "Monday");
}

#[test]
fn registered_locales_are_used_and_backfilled() {
    let settings = LocaleSettings {
        weekdays: Some(
            ["zondag", "maandag", "dinsdag", "woensdag", "donderdag", "vrijdag", "zaterdag"]
                .map(String::from)
                .to_vec(),
        ),
        months: None,
    };
    add_locale(settings, "xx").expect("register locale");

    let moment = Moment::new(2018, 7, 9);
    let options = FormatterOptions::default().with_locale("xx");
    assert_eq!(format_with_options("l", &moment, options.clone()), "maandag");
    // Months were not supplied and fall back to English.
    assert_eq!(format_with_options("F", &moment, options), "July");
}

#[test]
fn add_locale_rejects_malformed_tables() {
    let short_week = LocaleSettings {
        weekdays: Some(vec!["only".to_string(); 6]),
        months: None,
    };
    assert_eq!(
        add_locale(short_week, "xy"),
        Err(LocaleError::WeekdayCount(6))
    );

    let short_months = LocaleSettings {
        weekdays: None,
        months: Some(vec!["only".to_string(); 11]),
    };
    assert_eq!(
        add_locale(short_months, "xy"),
        Err(LocaleError::MonthCount(11))
    );

    assert_eq!(
        add_locale(LocaleSettings::default(), ""),
        Err(LocaleError::InvalidTag(String::new()))
    );
}

#[test]
fn options_can_inject_name_tables_directly() {
    let moment = Moment::new(2018, 7, 9);
    let options = FormatterOptions::default()
        .with_weekdays(["Sun", "Moon", "Tue", "Wed", "Thu", "Fri", "Sat"])
        .with_months([
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ]);
    assert_eq!(format_with_options("l F", &moment, options), "Moon Jul");
}

#[test]
fn moments_convert_from_chrono() {
    let offset = chrono::FixedOffset::east_opt(7_200).expect("offset");
    let dt = offset.with_ymd_and_hms(2004, 2, 12, 15, 19, 21).unwrap();
    let moment = Moment::from(&dt);
    assert_eq!(format("c", &moment), "2004-02-12T15:19:21+02:00");
    assert_eq!(format("U", &moment), dt.timestamp().to_string());
    // A fixed offset never observes DST.
    assert_eq!(format("I", &moment), "0");

    let utc = chrono::Utc.with_ymd_and_hms(2018, 7, 9, 15, 33, 24).unwrap();
    let moment = Moment::from(&utc);
    assert_eq!(format("Y-m-d H:i:s P", &moment), "2018-07-09 15:33:24 +00:00");
}
