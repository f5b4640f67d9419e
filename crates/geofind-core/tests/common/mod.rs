use geofind_core::Record;

/// Small in-memory dataset shared by the integration tests.
pub fn records() -> Vec<Record> {
    vec![
        Record::new("CHGVA", "Geneva", "Switzerland", "CH")
            .with_alt_name("Genève")
            .with_coordinates(46.2044, 6.1432),
        Record::new("ITGOA", "Genoa", "Italy", "IT").with_alt_name("Genova"),
        Record::new("FRPAR", "Paris", "France", "FR"),
        Record::new("GBLON", "London", "United Kingdom", "GB"),
        Record::new("CALON", "London", "Canada", "CA"),
        Record::new("GBLDN", "Port of London", "United Kingdom", "GB").with_obsolete(true),
        Record::new("DEHAM", "Hamburg", "Germany", "DE"),
        Record::new("NLRTM", "Rotterdam", "Netherlands", "NL"),
        Record::new("USROB", "Robert Port", "United States", "US"),
    ]
}
