use bloodcheck_core::{ProfileId, SexCategory};
use bloodcheck_panel::{format_reference, ReferenceCatalog};

#[test]
fn standard_catalog_lists_profiles_in_display_order() {
    let catalog = ReferenceCatalog::standard();
    let ids: Vec<ProfileId> = catalog.profiles().iter().map(|profile| profile.id).collect();

    assert_eq!(ids, ProfileId::all());
    assert_eq!(
        ids,
        [
            ProfileId::Basic,
            ProfileId::Extended,
            ProfileId::Hormone,
            ProfileId::Vital,
        ]
    );
}

#[test]
fn profiles_carry_the_expected_analyte_counts() {
    let catalog = ReferenceCatalog::standard();
    let counts: Vec<usize> = catalog
        .profiles()
        .iter()
        .map(|profile| profile.analytes.len())
        .collect();

    assert_eq!(counts, [5, 6, 5, 5]);
}

#[test]
fn analyte_keys_are_unique_within_each_profile() {
    let catalog = ReferenceCatalog::standard();

    for profile in catalog.profiles() {
        let mut keys: Vec<&str> = profile
            .analytes
            .iter()
            .map(|analyte| analyte.key.as_str())
            .collect();
        keys.sort_unstable();
        let before = keys.len();
        keys.dedup();

        assert_eq!(keys.len(), before, "key trùng trong hồ sơ {:?}", profile.id);
    }
}

#[test]
fn every_interval_is_well_formed() {
    let catalog = ReferenceCatalog::standard();

    for profile in catalog.profiles() {
        for analyte in &profile.analytes {
            for sex in [SexCategory::Male, SexCategory::Female] {
                let interval = analyte.reference.interval_for(sex);
                assert!(
                    interval.min <= interval.max,
                    "khoảng tham chiếu ngược cho {} ({:?})",
                    analyte.key,
                    sex
                );
                assert!(interval.contains(interval.min));
                assert!(interval.contains(interval.max));
            }
        }
    }
}

#[test]
fn sex_specific_intervals_resolve_per_sex() {
    let catalog = ReferenceCatalog::standard();

    let male = catalog
        .reference_interval(ProfileId::Extended, "ferritin", SexCategory::Male)
        .expect("ferritin phải có trong hồ sơ extended");
    assert_eq!((male.min, male.max), (30.0, 400.0));

    let female = catalog
        .reference_interval(ProfileId::Extended, "ferritin", SexCategory::Female)
        .expect("ferritin phải có trong hồ sơ extended");
    assert_eq!((female.min, female.max), (15.0, 150.0));

    let hb_female = catalog
        .reference_interval(ProfileId::Basic, "hb", SexCategory::Female)
        .expect("hb phải có trong hồ sơ basic");
    assert_eq!((hb_female.min, hb_female.max), (12.0, 16.0));
}

#[test]
fn reference_hints_format_like_the_export() {
    let catalog = ReferenceCatalog::standard();

    let wbc = catalog
        .analyte(ProfileId::Basic, "wbc")
        .expect("wbc phải có trong hồ sơ basic");
    assert_eq!(
        format_reference(wbc.reference.interval_for(SexCategory::Male), &wbc.unit),
        "4 – 10 G/L"
    );

    let tsh = catalog
        .analyte(ProfileId::Hormone, "tsh")
        .expect("tsh phải có trong hồ sơ hormone");
    assert_eq!(
        format_reference(tsh.reference.interval_for(SexCategory::Female), &tsh.unit),
        "0.4 – 4 mIU/L"
    );

    let hba1c = catalog
        .analyte(ProfileId::Vital, "hba1c")
        .expect("hba1c phải có trong hồ sơ vital");
    assert_eq!(
        format_reference(hba1c.reference.interval_for(SexCategory::Male), &hba1c.unit),
        "4 – 5.6 %"
    );
}
