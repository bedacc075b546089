use natal::{calculate_natal_chart, BirthData, Body, ChartPoint, NatalChart, PartialBirthData};
use serde_json::{json, Value};

fn chart() -> NatalChart {
    calculate_natal_chart(&BirthData {
        year: 1985,
        month: 7,
        day: 4,
        hour: 8,
        minute: 0,
        latitude: 51.5074,
        longitude: -0.1278,
        utc_offset: 0.0,
    })
}

#[test]
fn test_chart_wire_shape() {
    let value = serde_json::to_value(chart()).unwrap();

    let positions = value["positions"].as_array().unwrap();
    assert_eq!(positions.len(), 10);
    assert_eq!(positions[0]["body"], "sun");
    assert_eq!(positions[0]["sign"], "cancer");
    assert!(positions[0]["total_degrees"].is_f64());
    assert!(positions[0]["retrograde"].is_boolean());

    assert!(value["ascendant"]["sign"].is_string());
    assert_eq!(value["house_cusps"].as_array().unwrap().len(), 12);

    for aspect in value["aspects"].as_array().unwrap() {
        let kind = aspect["kind"].as_str().unwrap();
        assert_eq!(kind, kind.to_lowercase());
        let nature = aspect["nature"].as_str().unwrap();
        assert!(["harmonious", "challenging", "neutral"].contains(&nature));
    }
}

#[test]
fn test_chart_deserializes_back() {
    let cast = chart();
    let text = serde_json::to_string(&cast).unwrap();
    let parsed: NatalChart = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed.aspects.len(), cast.aspects.len());
    for body in Body::ALL {
        assert_eq!(parsed.position(body).sign, cast.position(body).sign);
        assert_eq!(parsed.position(body).house, cast.position(body).house);
    }
}

#[test]
fn test_chart_point_is_a_plain_string() {
    assert_eq!(serde_json::to_value(ChartPoint::Ascendant).unwrap(), json!("ascendant"));
    assert_eq!(serde_json::to_value(ChartPoint::Body(Body::Mars)).unwrap(), json!("mars"));
    let parsed: ChartPoint = serde_json::from_value(json!("MC")).unwrap();
    assert_eq!(parsed, ChartPoint::Midheaven);
    assert!(serde_json::from_value::<ChartPoint>(json!("earth")).is_err());
}

#[test]
fn test_partial_birth_data_accepts_nulls() {
    let partial: PartialBirthData = serde_json::from_value(json!({
        "year": 1990,
        "month": 3,
        "day": null,
        "hour": 12,
        "minute": null,
        "latitude": null,
        "longitude": null,
        "utc_offset": -5.0
    }))
    .unwrap();
    assert_eq!(partial.day, None);
    assert_eq!(partial.hour, Some(12));
    assert_eq!(partial.utc_offset, Some(-5.0));

    let placement = serde_json::to_value(chart().placement(ChartPoint::Midheaven)).unwrap();
    assert_eq!(placement["point"], Value::from("midheaven"));
    assert_eq!(placement["house"], 10);
}
