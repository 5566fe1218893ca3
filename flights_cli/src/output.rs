use shared::flight::{AirportTraffic, FlightRecord, MonthCount};

const SEPARATOR_WIDTH: usize = 50;

pub fn flights(records: &[FlightRecord]) -> String {
    if records.is_empty() {
        return "No flights found\n".to_string();
    }
    records.iter().map(flight).collect()
}

fn flight(record: &FlightRecord) -> String {
    let f = &record.flight;
    let fields: [(&str, String); 17] = [
        ("id", record.id.to_string()),
        ("airline", f.airline.clone()),
        ("from", f.origin.clone()),
        ("to", f.destination.clone()),
        ("day", f.day.to_string()),
        ("month", f.month.to_string()),
        ("year", f.year.to_string()),
        ("duration", f.duration.to_string()),
        ("age", f.age.to_string()),
        ("gender", f.gender.clone()),
        ("reason", f.reason.clone()),
        ("stay", f.stay.clone()),
        ("connection", f.connection.to_string()),
        ("wait", f.wait.to_string()),
        ("ticket", f.ticket.clone()),
        ("checked_bags", f.checked_bags.to_string()),
        ("carry_on", f.carry_on.to_string()),
    ];

    let mut out = fields
        .iter()
        .map(|(key, value)| format!("{key}: {value}\n"))
        .collect::<String>();
    out.push_str(&"=".repeat(SEPARATOR_WIDTH));
    out.push('\n');
    out
}

pub fn airports(airports: &[AirportTraffic]) -> String {
    if airports.is_empty() {
        return "No airports found\n".to_string();
    }
    airports
        .iter()
        .map(|a| format!("{} - {} passengers\n", a.code, a.total_passengers))
        .collect()
}

pub fn busiest_months(airport_code: &str, months: &[MonthCount]) -> String {
    if months.is_empty() {
        return format!("No data available for airport {airport_code}\n");
    }
    month_table(
        format!("Busiest months for airport {airport_code}:"),
        "Passengers",
        months,
    )
}

pub fn airline_months(airport_code: &str, airline_name: &str, months: &[MonthCount]) -> String {
    if months.is_empty() {
        return format!("No data available for airline {airline_name} at airport {airport_code}\n");
    }
    month_table(
        format!("Traffic by months for airline {airline_name} at airport {airport_code}:"),
        "Flights",
        months,
    )
}

pub fn vacation_months(airport_code: &str, months: &[MonthCount]) -> String {
    if months.is_empty() {
        return format!("No data available for airport {airport_code}\n");
    }
    month_table(
        format!("Busiest vacation/pleasure months for airport {airport_code}:"),
        "Flights",
        months,
    )
}

fn month_table(heading: String, label: &str, months: &[MonthCount]) -> String {
    let mut out = heading;
    out.push('\n');
    for m in months {
        out.push_str(&format!("Month: {}, {label}: {}\n", m.month, m.count));
    }
    out
}
