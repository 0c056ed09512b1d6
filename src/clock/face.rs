use chrono::{NaiveTime, Timelike};
use derive_more::Display;

use super::mode::ClockMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Meridiem {
    #[display("AM")]
    Am,
    #[display("PM")]
    Pm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockFace {
    pub hours: u32,
    pub minutes: u32,
    pub meridiem: Option<Meridiem>,
}

impl ClockFace {
    pub fn new(time: NaiveTime, mode: ClockMode) -> Self {
        let hours = time.hour();
        let minutes = time.minute();

        match mode {
            ClockMode::TwelveHour => Self {
                // midnight and noon render as 0, not 12
                hours: hours % 12,
                minutes,
                meridiem: Some(if hours >= 12 { Meridiem::Pm } else { Meridiem::Am }),
            },
            ClockMode::TwentyFourHour => Self {
                hours,
                minutes,
                meridiem: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hours: u32, minutes: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hours, minutes, 0).unwrap()
    }

    #[test]
    fn twelve_hour_face_for_every_hour() {
        for hours in 0..24 {
            let face = ClockFace::new(at(hours, 0), ClockMode::TwelveHour);

            assert_eq!(face.hours, hours % 12);
            let expected = if hours >= 12 { Meridiem::Pm } else { Meridiem::Am };
            assert_eq!(face.meridiem, Some(expected));
        }
    }

    #[test]
    fn twenty_four_hour_face_for_every_hour() {
        for hours in 0..24 {
            let face = ClockFace::new(at(hours, 0), ClockMode::TwentyFourHour);

            assert_eq!(face.hours, hours);
            assert_eq!(face.meridiem, None);
        }
    }

    #[test]
    fn morning_time() {
        let face = ClockFace::new(at(9, 5), ClockMode::TwelveHour);
        assert_eq!((face.hours, face.minutes, face.meridiem), (9, 5, Some(Meridiem::Am)));

        let face = ClockFace::new(at(9, 5), ClockMode::TwentyFourHour);
        assert_eq!((face.hours, face.minutes, face.meridiem), (9, 5, None));
    }

    #[test]
    fn past_midnight_keeps_hour_zero() {
        let face = ClockFace::new(at(0, 30), ClockMode::TwelveHour);
        assert_eq!((face.hours, face.minutes, face.meridiem), (0, 30, Some(Meridiem::Am)));

        let face = ClockFace::new(at(0, 30), ClockMode::TwentyFourHour);
        assert_eq!((face.hours, face.minutes, face.meridiem), (0, 30, None));
    }

    #[test]
    fn afternoon_time() {
        let face = ClockFace::new(at(13, 45), ClockMode::TwelveHour);
        assert_eq!((face.hours, face.minutes, face.meridiem), (1, 45, Some(Meridiem::Pm)));

        let face = ClockFace::new(at(13, 45), ClockMode::TwentyFourHour);
        assert_eq!((face.hours, face.minutes, face.meridiem), (13, 45, None));
    }

    #[test]
    fn meridiem_tags() {
        assert_eq!(Meridiem::Am.to_string(), "AM");
        assert_eq!(Meridiem::Pm.to_string(), "PM");
    }
}
