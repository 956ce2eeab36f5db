//! End-to-end scenarios through the public service facade: seeding, searching, listing a new
//! property, and capturing leads.

use std::io::Cursor;
use std::sync::Arc;

use realty::finance::{calculate_emi, format_indian_price, group_indian_digits, LoanTerms};
use realty::listings::{
    seed_samples, BhkConfig, InMemoryListingRepository, ListingCsvImporter, ListingRepository,
    ListingService, PropertyId, PropertyType, SearchCriteria, SearchQuery,
};
use rust_decimal::Decimal;
use serde_json::json;

fn seeded() -> ListingService<InMemoryListingRepository> {
    let repository = Arc::new(InMemoryListingRepository::new());
    seed_samples(repository.as_ref()).expect("samples seed");
    ListingService::new(repository)
}

#[test]
fn seeded_catalogue_supports_landing_page_queries() {
    let service = seeded();

    let featured = service.featured().expect("featured loads");
    let titles: Vec<&str> = featured
        .iter()
        .map(|property| property.details.title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec![
            "Luxury Sea View Apartment",
            "Premium City Apartment",
            "Garden Villa",
            "Designer Home",
            "Smart Apartment",
            "Executive Penthouse",
        ]
    );

    let mumbai = service
        .search(&SearchCriteria::default().with_city("Mumbai"))
        .expect("search succeeds");
    let ids: Vec<PropertyId> = mumbai.iter().map(|property| property.id).collect();
    assert_eq!(ids, vec![PropertyId(1), PropertyId(6)]);
}

#[test]
fn owner_listing_flows_into_search_results() {
    let service = seeded();

    let stored = service
        .submit_property(&json!({
            "title": "Marina Bay Residences",
            "description": "Sea-facing 3BHK with clubhouse access and two parking slots.",
            "location": "Adyar, Chennai",
            "city": "Chennai",
            "state": "Tamil Nadu",
            "price": "15500000",
            "propertyType": "Apartment",
            "bhkConfig": "3BHK",
            "bedrooms": 3,
            "bathrooms": 3,
            "carpetArea": 1400,
            "builtUpArea": 1650,
            "imageUrl": "https://img.example/marina.jpg",
            "newLaunch": true,
            "contactNumber": "+919840012345"
        }))
        .expect("listing accepted");
    assert_eq!(stored.id, PropertyId(7));
    assert!(!stored.details.featured);

    let results = service
        .search_query(SearchQuery {
            city: Some("Chennai".into()),
            property_type: Some("apartment".into()),
            max_price: Some("20000000".into()),
            ..SearchQuery::default()
        })
        .expect("search succeeds");
    assert_eq!(results, vec![stored.clone()]);

    let featured = service.featured().expect("featured loads");
    assert!(featured.iter().all(|property| property.id != stored.id));
    assert_eq!(format_indian_price(stored.details.price), "₹1.6 Crores");
}

#[test]
fn csv_import_appends_after_samples() {
    let repository = Arc::new(InMemoryListingRepository::new());
    seed_samples(repository.as_ref()).expect("samples seed");

    let csv = "title,description,location,city,state,price,property_type,bhk_config,bedrooms,bathrooms,carpet_area,built_up_area,image_url,contact_number,luxury\n\
Orchid Towers,High-rise 1BHK near the IT park.,Hinjewadi,Pune,Maharashtra,6200000,apartment,1BHK,1,1,520,640,https://img.example/orchid.jpg,+919822000111,false\n\
Tech Park Office,Grade A office floor with 40 workstations.,Whitefield,Bangalore,Karnataka,38000000,Commercial,4BHK,0,2,3200,3600,https://img.example/office.jpg,+919822000222,true\n";

    let drafts = ListingCsvImporter::from_reader(Cursor::new(csv)).expect("csv parses");
    for draft in drafts {
        repository.insert_property(draft).expect("insert succeeds");
    }

    let commercial = repository
        .search(&SearchCriteria::default().with_property_type(PropertyType::Commercial))
        .expect("search succeeds");
    assert_eq!(commercial.len(), 1);
    assert_eq!(commercial[0].id, PropertyId(8));
    assert!(commercial[0].details.luxury);

    let one_bhk = repository
        .search(&SearchCriteria::default().with_bhk(BhkConfig::One))
        .expect("search succeeds");
    assert_eq!(one_bhk[0].details.price, Decimal::from(6_200_000));
}

#[test]
fn lead_capture_keeps_inquiries_in_arrival_order() {
    let service = seeded();

    for (first, phone) in [("Kavya", "9000000001"), ("Arjun", "7000000002")] {
        service
            .submit_inquiry(&json!({
                "firstName": first,
                "lastName": "Iyer",
                "email": format!("{}@example.in", first.to_lowercase()),
                "phone": phone,
            }))
            .expect("inquiry accepted");
    }

    let inquiries = service.inquiries().expect("inquiries load");
    let names: Vec<&str> = inquiries
        .iter()
        .map(|inquiry| inquiry.details.first_name.as_str())
        .collect();
    assert_eq!(names, vec!["Kavya", "Arjun"]);
    assert!(inquiries[0].created_at <= inquiries[1].created_at);
}

#[test]
fn emi_quote_for_featured_listing() {
    let breakdown = calculate_emi(LoanTerms::new(5_000_000.0, 8.5, 20.0)).expect("valid terms");
    assert_eq!(group_indian_digits(breakdown.monthly_installment), "43,391");
    assert_eq!(group_indian_digits(breakdown.total_payment), "1,04,13,879");

    let error = calculate_emi(LoanTerms::new(5_000_000.0, 8.5, 0.0)).expect_err("zero tenure");
    assert!(error.mentions("tenureYears"));
}
