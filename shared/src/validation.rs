//! Validation utilities for the Herb Trace Platform
//!
//! Includes Thailand-specific validations for farm registration data.

use rust_decimal::Decimal;

use crate::types::GpsCoordinates;

// ============================================================================
// General Validations
// ============================================================================

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

/// Validate cultivation area in rai
pub fn validate_cultivation_area(area_rai: Decimal) -> Result<(), &'static str> {
    if area_rai <= Decimal::ZERO {
        return Err("Cultivation area must be positive");
    }
    Ok(())
}

// ============================================================================
// Thailand-Specific Validations
// ============================================================================

/// Validate Thai phone number format
/// Accepts: 0812345678, 081-234-5678, +66812345678
pub fn validate_thai_phone(phone: &str) -> Result<(), &'static str> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    // Thai mobile: 10 digits starting with 0 (e.g., 0812345678)
    if digits.len() == 10 && digits.starts_with('0') {
        return Ok(());
    }
    // International format without leading 0: 9 digits (e.g., 812345678)
    if digits.len() == 9 && !digits.starts_with('0') {
        return Ok(());
    }
    // International format with country code: 11 digits starting with 66
    if digits.len() == 11 && digits.starts_with("66") {
        return Ok(());
    }

    Err("Invalid Thai phone number format")
}

/// Validate coordinates fall inside Thailand's bounding box
pub fn validate_coordinates(coordinates: &GpsCoordinates) -> Result<(), &'static str> {
    let lat = coordinates.latitude;
    let lng = coordinates.longitude;

    if lat < Decimal::new(55, 1) || lat > Decimal::new(205, 1) {
        return Err("Latitude is outside Thailand");
    }
    if lng < Decimal::new(973, 1) || lng > Decimal::new(1057, 1) {
        return Err("Longitude is outside Thailand");
    }
    Ok(())
}

/// Validate GACP certificate number format
/// Format: GACP-YYYY-NNNNN (e.g., GACP-2024-00123)
pub fn validate_gacp_certificate(cert_number: &str) -> Result<(), &'static str> {
    let parts: Vec<&str> = cert_number.split('-').collect();

    if parts.len() != 3 {
        return Err("GACP certificate must be in format GACP-YYYY-NNNNN");
    }

    if parts[0] != "GACP" {
        return Err("GACP certificate must start with 'GACP'");
    }

    if parts[1].len() != 4 || !parts[1].chars().all(|c| c.is_ascii_digit()) {
        return Err("Invalid year in GACP certificate");
    }

    if parts[2].len() != 5 || !parts[2].chars().all(|c| c.is_ascii_digit()) {
        return Err("Invalid sequence number in GACP certificate");
    }

    Ok(())
}
