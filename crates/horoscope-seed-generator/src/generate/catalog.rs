//! Horoscope methods, the methods each prophet practises, and courses.

use std::collections::HashMap;

use horoscope_seed_core::{
    Course, CourseId, HoroscopeMethod, HoroscopeSector, MethodId, Price, Prophet, ProphetId,
    ProphetMethod,
};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::context::SeedContext;
use crate::pools::{COURSE_DURATIONS, COURSE_TIERS, METHOD_NAMES};

/// Cheapest course price, in satang.
pub const MIN_PRICE_SATANG: u64 = 30_000;

/// Most expensive course price, in satang.
pub const MAX_PRICE_SATANG: u64 = 200_000;

/// The fixed method catalog with ids `1..=10`.
#[must_use]
pub fn generate_horoscope_methods() -> Vec<HoroscopeMethod> {
    (1..)
        .zip(METHOD_NAMES)
        .map(|(id, name)| HoroscopeMethod::new(MethodId::new(id), name))
        .collect()
}

/// One to three distinct methods per prophet.
pub fn generate_prophet_methods(
    ctx: &mut SeedContext,
    prophets: &[Prophet],
    methods: &[HoroscopeMethod],
) -> Vec<ProphetMethod> {
    let mut links = Vec::new();
    for prophet in prophets {
        let count = ctx.rng().gen_range(1..=3);
        links.extend(
            methods
                .choose_multiple(ctx.rng(), count)
                .map(|method| ProphetMethod {
                    prophet_id: prophet.id.clone(),
                    method_id: method.id,
                }),
        );
    }
    links
}

/// One to three courses per prophet, each using one of the prophet's own methods.
///
/// A prophet with no linked methods falls back to the whole catalog. No
/// courses are produced when the catalog is empty.
pub fn generate_courses(
    ctx: &mut SeedContext,
    prophets: &[Prophet],
    prophet_methods: &[ProphetMethod],
    methods: &[HoroscopeMethod],
) -> Vec<Course> {
    let names: HashMap<MethodId, &str> = methods.iter().map(|m| (m.id, m.name.as_str())).collect();
    let mut offered: HashMap<&ProphetId, Vec<MethodId>> = HashMap::new();
    for link in prophet_methods {
        offered.entry(&link.prophet_id).or_default().push(link.method_id);
    }
    let catalog: Vec<MethodId> = methods.iter().map(|m| m.id).collect();

    let now = ctx.now();
    let mut courses = Vec::new();
    for prophet in prophets {
        let choices = offered.get(&prophet.id).map_or(catalog.as_slice(), Vec::as_slice);
        let count = ctx.rng().gen_range(1..=3);
        for _ in 0..count {
            let Some(&method_id) = choices.choose(ctx.rng()) else {
                break;
            };
            let method_name = names.get(&method_id).copied().unwrap_or("Horoscope");
            let tier = ctx.pick(&COURSE_TIERS);
            courses.push(Course {
                id: CourseId::from_random_bytes(ctx.id_bytes()),
                prophet_id: prophet.id.clone(),
                course_name: format!("{tier} {method_name} Session"),
                horoscope_method_id: method_id,
                horoscope_sector: ctx.pick(&HoroscopeSector::ALL),
                duration_min: ctx.pick(&COURSE_DURATIONS),
                price: Price::from_satang(ctx.rng().gen_range(MIN_PRICE_SATANG..=MAX_PRICE_SATANG)),
                is_active: ctx.rng().gen_range(0..4) != 0,
                created_at: now,
                updated_at: now,
            });
        }
    }
    courses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::accounts::{generate_accounts, AccountRegistry};
    use crate::generate::profiles::generate_prophets;
    use chrono::{TimeZone, Utc};
    use std::collections::HashSet;

    fn setup() -> (SeedContext, Vec<Prophet>) {
        let mut ctx = SeedContext::new(5, Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap());
        let accounts = generate_accounts(&mut ctx, &mut AccountRegistry::new(), 0, 12, 0);
        let prophets = generate_prophets(&mut ctx, &accounts);
        (ctx, prophets)
    }

    #[test]
    fn method_catalog_is_sequential_with_slugs() {
        let methods = generate_horoscope_methods();
        assert_eq!(methods.len(), 10);
        assert_eq!(methods[0].id, MethodId::new(1));
        assert_eq!(methods[0].slug, "tarot_reading");
        assert_eq!(methods[9].id, MethodId::new(10));
    }

    #[test]
    fn prophet_methods_are_distinct_per_prophet() {
        let (mut ctx, prophets) = setup();
        let links = generate_prophet_methods(&mut ctx, &prophets, &generate_horoscope_methods());

        for prophet in &prophets {
            let mine: Vec<_> = links.iter().filter(|l| l.prophet_id == prophet.id).collect();
            assert!((1..=3).contains(&mine.len()));
            let unique: HashSet<_> = mine.iter().map(|l| l.method_id).collect();
            assert_eq!(unique.len(), mine.len());
        }
    }

    #[test]
    fn courses_use_offered_methods() {
        let (mut ctx, prophets) = setup();
        let methods = generate_horoscope_methods();
        let links = generate_prophet_methods(&mut ctx, &prophets, &methods);
        let courses = generate_courses(&mut ctx, &prophets, &links, &methods);
        let offered: HashSet<_> = links.iter().map(|l| (l.prophet_id.clone(), l.method_id)).collect();

        assert!(courses.len() >= prophets.len());
        for course in &courses {
            assert!(offered.contains(&(course.prophet_id.clone(), course.horoscope_method_id)));
            assert!(COURSE_DURATIONS.contains(&course.duration_min));
            assert!((MIN_PRICE_SATANG..=MAX_PRICE_SATANG).contains(&course.price.satang()));
            assert!(course.course_name.ends_with(" Session"));
        }
    }

    #[test]
    fn no_methods_means_no_courses() {
        let (mut ctx, prophets) = setup();
        assert!(generate_courses(&mut ctx, &prophets, &[], &[]).is_empty());
    }
}
