//! URL and pre-check coverage for every endpoint method.
//!
//! # Design
//! A recording transport captures the request and answers with a network
//! error, so each method is checked for the exact URL it produces without
//! caring about the response shape.

use std::sync::{Arc, Mutex};

use odb_core::endpoints::*;
use odb_core::{
    with_api_key, with_base_url, with_transport, ApiError, HttpRequest, HttpResponse, OdbClient,
    Transport,
};

#[derive(Default)]
struct Recorder {
    urls: Mutex<Vec<String>>,
}

impl Recorder {
    fn calls(&self) -> usize {
        self.urls.lock().unwrap().len()
    }

    fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.urls.lock().unwrap())
    }
}

impl Transport for Recorder {
    fn get(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        self.urls.lock().unwrap().push(request.url.clone());
        Err(ApiError::Network("recorded".to_string()))
    }
}

fn client(api_key: &str, recorder: &Arc<Recorder>) -> OdbClient {
    OdbClient::new([
        with_api_key(api_key),
        with_base_url("https://h/api/v2"),
        with_transport(recorder.clone()),
    ])
}

type Call = fn(&OdbClient) -> Result<(), ApiError>;

fn s(v: &str) -> Option<String> {
    Some(v.to_string())
}

fn entry(name: &'static str, call: Call, path: &'static str) -> (&'static str, Call, &'static str) {
    (name, call, path)
}

fn case(name: &'static str, call: Call) -> (&'static str, Call) {
    (name, call)
}

fn catalog() -> Vec<(&'static str, Call, &'static str)> {
    vec![
        entry(
            "government_company",
            |c| c.government_company("31325005").map(drop),
            "/government-companies?apiKey=K&code=31325005",
        ),
        entry("dpa", |c| c.dpa("2977014518").map(drop), "/dpa/2977014518?apiKey=K"),
        entry("company", |c| c.company("31325005").map(drop), "/company/31325005?apiKey=K"),
        entry(
            "changes",
            |c| {
                let p = ChangesParams { from: s("2024-01-01") };
                c.changes("31325005", &p).map(drop)
            },
            "/changed/31325005?apiKey=K&from=2024-01-01",
        ),
        entry("wagedebt", |c| c.wagedebt("1").map(drop), "/wagedebt/1?apiKey=K"),
        entry(
            "audit",
            |c| {
                let p = AuditParams {
                    code: s("1"),
                    limit: Some(10),
                    ..Default::default()
                };
                c.audit(&p).map(drop)
            },
            "/audit?apiKey=K&code=1&limit=10",
        ),
        entry("audit_by_id", |c| c.audit_by_id("7").map(drop), "/audit/7?apiKey=K"),
        entry(
            "registrations",
            |c| {
                let p = RegistrationsParams {
                    kind: s("fop"),
                    is_phone: Some(true),
                    ..Default::default()
                };
                c.registrations(&p).map(drop)
            },
            "/registrations?apiKey=K&is_phone=1&type=fop",
        ),
        entry("registration", |c| c.registration("5").map(drop), "/registrations/5?apiKey=K"),
        entry("inspections", |c| c.inspections("1").map(drop), "/inspections?apiKey=K&code=1"),
        entry("inspection", |c| c.inspection("9").map(drop), "/inspections/9?apiKey=K"),
        entry("pdf", |c| c.pdf("1").map(drop), "/pdf/1?apiKey=K"),
        entry(
            "permits",
            |c| {
                let p = PermitsParams {
                    code: s("1"),
                    ..Default::default()
                };
                c.permits(&p).map(drop)
            },
            "/permits?apiKey=K&code=1",
        ),
        entry(
            "singletax",
            |c| {
                let p = SingletaxParams {
                    fophash: s("abc"),
                    ..Default::default()
                };
                c.singletax(&p).map(drop)
            },
            "/singletax?apiKey=K&fophash=abc",
        ),
        entry(
            "vat",
            |c| {
                let p = VatParams {
                    vat_number: s("123"),
                    ..Default::default()
                };
                c.vat(&p).map(drop)
            },
            "/vat?apiKey=K&vatNumber=123",
        ),
        entry(
            "court_decisions",
            |c| {
                let p = CourtParams {
                    judgment_code: Some(2),
                    text: s("a b"),
                    ..Default::default()
                };
                c.court_decisions(&p).map(drop)
            },
            "/court?apiKey=K&judgment_code=2&text=a+b",
        ),
        entry(
            "institutions",
            |c| c.institutions(&Default::default()).map(drop),
            "/institutions?apiKey=K",
        ),
        entry(
            "court_decision",
            |c| c.court_decision("86301431").map(drop),
            "/court/86301431?apiKey=K",
        ),
        entry(
            "schedule",
            |c| {
                let p = ScheduleParams {
                    court_id: s("5011"),
                    ..Default::default()
                };
                c.schedule(&p).map(drop)
            },
            "/schedule?apiKey=K&courtId=5011",
        ),
        entry(
            "accused",
            |c| {
                let p = AccusedParams {
                    article: s("185"),
                    ..Default::default()
                };
                c.accused(&p).map(drop)
            },
            "/accused?apiKey=K&article=185",
        ),
        entry("schedule_item", |c| c.schedule_item("3").map(drop), "/schedule/3?apiKey=K"),
        entry(
            "company_courts",
            |c| c.company_courts("1").map(drop),
            "/company-courts?apiKey=K&code=1",
        ),
        entry(
            "company_courts_by_type",
            |c| {
                let p = CompanyCourtsParams {
                    limit: Some(5),
                    ..Default::default()
                };
                c.company_courts_by_type("civil", "1", &p).map(drop)
            },
            "/company-courts/civil?apiKey=K&code=1&limit=5",
        ),
        entry(
            "court_case",
            |c| c.court_case("761/1234/19", &Default::default()).map(drop),
            "/court-cases/761/1234/19?apiKey=K",
        ),
        entry(
            "transports",
            |c| {
                let p = TransportsParams {
                    number: s("AA1234BB"),
                    ..Default::default()
                };
                c.transports(&p).map(drop)
            },
            "/transport?apiKey=K&number=AA1234BB",
        ),
        entry("transport", |c| c.transport("11").map(drop), "/transport/11?apiKey=K"),
        entry(
            "transport_licenses",
            |c| {
                let p = TransportLicensesParams {
                    code: s("1"),
                    ..Default::default()
                };
                c.transport_licenses(&p).map(drop)
            },
            "/transport-licenses?apiKey=K&code=1",
        ),
        entry(
            "transport_license",
            |c| c.transport_license("4").map(drop),
            "/transport-licenses/4?apiKey=K",
        ),
        entry(
            "gen_key",
            |c| c.gen_key("salt", "42").map(drop),
            "/genKey?apiKey=K&id=42&salt=salt",
        ),
        entry("statistics", |c| c.statistics().map(drop), "/statistics?apiKey=K"),
        entry(
            "aliment",
            |c| {
                let p = AlimentParams {
                    limit: Some(5),
                    ..Default::default()
                };
                c.aliment("Petrenko", &p).map(drop)
            },
            "/aliment?apiKey=K&limit=5&pib=Petrenko",
        ),
        entry(
            "lawyers",
            |c| {
                let p = LawyersParams {
                    name: s("Shevchenko"),
                    ..Default::default()
                };
                c.lawyers(&p).map(drop)
            },
            "/lawyers?apiKey=K&name=Shevchenko",
        ),
        entry("lawyer", |c| c.lawyer("8").map(drop), "/lawyers/8?apiKey=K"),
        entry(
            "corrupt_officials",
            |c| c.corrupt_officials("Petrenko", &Default::default()).map(drop),
            "/corrupt-officials?apiKey=K&pib=Petrenko",
        ),
        entry(
            "corrupt_official",
            |c| c.corrupt_official("d2").map(drop),
            "/corrupt-officials/d2?apiKey=K",
        ),
        entry(
            "passport",
            |c| c.passport("CP634742").map(drop),
            "/passport?apiKey=K&number=CP634742",
        ),
        entry(
            "wanted",
            |c| {
                let p = PersonSearchParams {
                    start: Some(10),
                    ..Default::default()
                };
                c.wanted("Petrenko", &p).map(drop)
            },
            "/wanted?apiKey=K&pib=Petrenko&start=10",
        ),
        entry(
            "full_penalty",
            |c| {
                let p = FullPenaltySourceParams {
                    source: s("opendatabot"),
                };
                c.full_penalty("59581015", &p).map(drop)
            },
            "/full-penalty/59581015?apiKey=K&source=opendatabot",
        ),
        entry(
            "full_penalty_doc",
            |c| c.full_penalty_doc("59581015", "s3").map(drop),
            "/full-penalty-doc/59581015?apiKey=K&secret=s3",
        ),
        entry(
            "full_penalties",
            |c| {
                let p = FullPenaltyParams {
                    borrower_code: s("1"),
                    ..Default::default()
                };
                c.full_penalties(&p).map(drop)
            },
            "/full-penalty?apiKey=K&borrower_code=1",
        ),
        entry(
            "performers",
            |c| {
                let p = PerformerParams {
                    kind: s("private"),
                    ..Default::default()
                };
                c.performers(&p).map(drop)
            },
            "/performer?apiKey=K&type=private",
        ),
        entry(
            "penalties_by_code",
            |c| {
                let p = PenaltiesByCodeParams {
                    category: s("01"),
                    ..Default::default()
                };
                c.penalties_by_code("1", &p).map(drop)
            },
            "/penalties/1?apiKey=K&categories%5B1%5D=01",
        ),
        entry("penalty", |c| c.penalty("123").map(drop), "/penalty/123?apiKey=K"),
        entry(
            "penalties",
            |c| {
                c.penalties("Ivan", "Petrenko", "1990-01-01", &Default::default())
                    .map(drop)
            },
            "/penalties?apiKey=K&birth_date=1990-01-01&first_name=Ivan&last_name=Petrenko",
        ),
        entry("koatuu_regions", |c| c.koatuu_regions().map(drop), "/koatuu/regions?apiKey=K"),
        entry(
            "koatuu_region",
            |c| c.koatuu_region("8000000000").map(drop),
            "/koatuu/regions/8000000000?apiKey=K",
        ),
        entry(
            "realty",
            |c| {
                let p = RealtyParams {
                    role: Some(11),
                    ..Default::default()
                };
                c.realty("1", &p).map(drop)
            },
            "/realty?apiKey=K&code=1&role=11",
        ),
        entry("realty_item", |c| c.realty_item("42", "7").map(drop), "/realty/42/7?apiKey=K"),
        entry(
            "realty_result",
            |c| c.realty_result("r1").map(drop),
            "/realty-result?apiKey=K&resultId=r1",
        ),
        entry(
            "realty_report",
            |c| c.realty_report("8000000000:01:001:0001").map(drop),
            "/realty-report/8000000000:01:001:0001?apiKey=K",
        ),
        entry(
            "timeline",
            |c| {
                let p = TimelineParams {
                    code: s("1"),
                    order_field: s("event_date"),
                    ..Default::default()
                };
                c.timeline(&p).map(drop)
            },
            "/timeline?apiKey=K&code=1&order_field=event_date",
        ),
    ]
}

const PUBLIC: [&str; 3] = ["institutions", "koatuu_regions", "koatuu_region"];

#[test]
fn catalog_has_every_endpoint() {
    let names: std::collections::BTreeSet<_> = catalog().iter().map(|(n, _, _)| *n).collect();
    assert_eq!(names.len(), 51);
}

#[test]
fn every_endpoint_builds_expected_url() {
    let recorder = Arc::new(Recorder::default());
    let client = client("K", &recorder);

    for (name, call, expected) in catalog() {
        let err = call(&client).unwrap_err();
        assert_eq!(err, ApiError::Network("recorded".to_string()), "{name}");
        let urls = recorder.take();
        assert_eq!(urls, vec![format!("https://h/api/v2{expected}")], "{name}");
    }
}

#[test]
fn keyed_endpoints_refuse_without_api_key() {
    let recorder = Arc::new(Recorder::default());
    let client = client("", &recorder);

    for (name, call, _) in catalog() {
        let result = call(&client);
        if PUBLIC.contains(&name) {
            assert_eq!(recorder.take().len(), 1, "{name} should reach the transport");
            continue;
        }
        assert_eq!(
            result,
            Err(ApiError::Validation("api key is not specified".to_string())),
            "{name}"
        );
        assert_eq!(recorder.calls(), 0, "{name}");
    }
}

#[test]
fn public_endpoints_omit_key_when_unset() {
    let recorder = Arc::new(Recorder::default());
    let client = client("", &recorder);

    client.koatuu_region("8000000000").unwrap_err();
    assert_eq!(
        recorder.take(),
        vec!["https://h/api/v2/koatuu/regions/8000000000".to_string()]
    );
}

#[test]
fn blank_identifiers_are_rejected_before_io() {
    let recorder = Arc::new(Recorder::default());
    let client = client("K", &recorder);

    let calls = vec![
        case("dpa", |c| c.dpa("").map(drop)),
        case("company", |c| c.company(" ").map(drop)),
        case("government_company", |c| c.government_company("").map(drop)),
        case("inspections", |c| c.inspections("").map(drop)),
        case("company_courts", |c| c.company_courts("").map(drop)),
        case("company_courts_by_type", |c| {
            c.company_courts_by_type("civil", "", &Default::default())
                .map(drop)
        }),
        case("realty", |c| c.realty("", &Default::default()).map(drop)),
        case("realty_item", |c| c.realty_item("42", "").map(drop)),
        case("realty_result", |c| c.realty_result("").map(drop)),
        case("passport", |c| c.passport("").map(drop)),
        case("koatuu_region", |c| c.koatuu_region("").map(drop)),
        case("court_case", |c| c.court_case("", &Default::default()).map(drop)),
        case("full_penalty_doc", |c| c.full_penalty_doc("\t", "s").map(drop)),
    ];

    for (name, call) in calls {
        assert!(
            matches!(call(&client), Err(ApiError::Validation(_))),
            "{name}"
        );
    }
    assert_eq!(recorder.calls(), 0);
}

#[test]
fn optional_filters_left_unset_are_omitted() {
    let recorder = Arc::new(Recorder::default());
    let client = client("K", &recorder);

    client.timeline(&TimelineParams::default()).unwrap_err();
    client.registrations(&RegistrationsParams::default()).unwrap_err();

    assert_eq!(
        recorder.take(),
        vec![
            "https://h/api/v2/timeline?apiKey=K".to_string(),
            "https://h/api/v2/registrations?apiKey=K".to_string(),
        ]
    );
}
