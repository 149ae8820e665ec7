//! Example measurement panels (placeholder values, not clinical data).

use hormonyx_common::analytes::*;
use hormonyx_common::MeasurementSnapshot;

fn panel(label: &str, values: [(&str, f64); 17]) -> MeasurementSnapshot {
    MeasurementSnapshot::from_values(label, values.map(|(k, v)| (k, Some(v))))
}

/// Female, perimenopause.
pub fn example_a() -> MeasurementSnapshot {
    panel(
        "Example A – Female (Perimenopause)",
        [
            (PROGESTERONE,            2.1),
            (PREGNENOLONE,           70.0),
            (HYDROXYPROGESTERONE_17, 45.0),
            (ESTRONE,                95.0),
            (ESTRADIOL,              45.0),
            (ESTRIOL,                 0.4),
            (HYDROXYESTRONE_2,       12.0),
            (TESTOSTERONE,           24.0),
            (DHEA,                  165.0),
            (DHT,                     6.0),
            (ANDROSTENEDIONE,        90.0),
            (ANDROSTERONE,          120.0),
            (HYDROXYTESTOSTERONE,     4.0),
            (CORTISOL,               17.5),
            (CORTISONE,               3.2),
            (CORTICOSTERONE,          0.6),
            (ALDOSTERONE,            14.0),
        ],
    )
}

/// High stress.
pub fn example_b() -> MeasurementSnapshot {
    panel(
        "Example B – High Stress",
        [
            (PROGESTERONE,            4.2),
            (PREGNENOLONE,           60.0),
            (HYDROXYPROGESTERONE_17, 38.0),
            (ESTRONE,               120.0),
            (ESTRADIOL,              90.0),
            (ESTRIOL,                 0.7),
            (HYDROXYESTRONE_2,       10.0),
            (TESTOSTERONE,           30.0),
            (DHEA,                  120.0),
            (DHT,                     8.0),
            (ANDROSTENEDIONE,       110.0),
            (ANDROSTERONE,          140.0),
            (HYDROXYTESTOSTERONE,     5.0),
            (CORTISOL,               22.0),
            (CORTISONE,               3.8),
            (CORTICOSTERONE,          0.4),
            (ALDOSTERONE,            18.0),
        ],
    )
}

/// Two-visit timeline: T1 = example A, T2 = example B.
pub fn example_history() -> [MeasurementSnapshot; 2] {
    [example_a().relabel("T1"), example_b().relabel("T2")]
}
