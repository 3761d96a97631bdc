//! Notification Templater
//!
//! Fixed HTML templates for booking status emails. Pure string
//! rendering: substitution plus optional-field omission, nothing
//! else. Empty fields are dropped rather than rendered as blank
//! placeholders.

use shared::models::Booking;

use crate::utils::time::humanize_date;

pub const APPROVAL_SUBJECT: &str = "🎉 Your Moon Restaurant Booking is Confirmed!";
pub const REJECTION_SUBJECT: &str = "Moon Restaurant Booking Update";
pub const CANCELLATION_SUBJECT: &str = "Moon Restaurant Booking Cancelled";

const FOOTER: &str = "\
      <div class=\"footer\">\n\
        <p>Moon Restaurant - Where Every Meal is a Celebration</p>\n\
        <p>This is an automated message. Please do not reply to this email.</p>\n\
      </div>\n";

/// Render the "booking confirmed" email.
///
/// Embeds branch, human-readable date, time, party size and (when
/// present) the occasion and the admin's note.
pub fn render_approval(booking: &Booking, note: Option<&str>) -> String {
    let mut html = String::with_capacity(2048);
    html.push_str(
        "<!DOCTYPE html>\n<html>\n<head>\n<style>\n\
         body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; }\n\
         .container { max-width: 600px; margin: 0 auto; padding: 20px; }\n\
         .header { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 30px; text-align: center; border-radius: 10px 10px 0 0; }\n\
         .content { background: #f9f9f9; padding: 30px; border-radius: 0 0 10px 10px; }\n\
         .booking-details { background: white; padding: 20px; border-radius: 8px; margin: 20px 0; }\n\
         .detail-row { display: flex; justify-content: space-between; padding: 10px 0; border-bottom: 1px solid #eee; }\n\
         .detail-label { font-weight: bold; color: #667eea; }\n\
         .footer { text-align: center; color: #999; font-size: 12px; margin-top: 30px; }\n\
         </style>\n</head>\n<body>\n<div class=\"container\">\n\
         <div class=\"header\"><h1>🎉 Booking Confirmed!</h1></div>\n\
         <div class=\"content\">\n",
    );
    html.push_str(&format!("<h2>Dear {},</h2>\n", booking.name));
    html.push_str("<p>Great news! Your booking has been <strong>confirmed</strong>.</p>\n");
    if let Some(note) = note
        && !note.trim().is_empty()
    {
        html.push_str(&format!("<p><em>\"{}\"</em></p>\n", note));
    }

    html.push_str("<div class=\"booking-details\">\n<h3>Booking Details</h3>\n");
    detail_row(&mut html, "Branch", booking.branch.display_name());
    detail_row(&mut html, "Date", &humanize_date(booking.date));
    detail_row(&mut html, "Time", &booking.time);
    detail_row(&mut html, "Guests", &format!("{} people", booking.guests));
    if let Some(occasion) = &booking.occasion
        && !occasion.trim().is_empty()
    {
        detail_row(&mut html, "Occasion", occasion);
    }
    html.push_str("</div>\n");

    html.push_str(
        "<p>We look forward to serving you! Please arrive 10 minutes before your reservation time.</p>\n\
         <p>If you need to make any changes, please contact us at least 24 hours in advance.</p>\n",
    );
    html.push_str(FOOTER);
    html.push_str("</div>\n</div>\n</body>\n</html>\n");
    html
}

/// Render the "booking declined" email, with the reason box omitted
/// when no reason was given.
pub fn render_rejection(booking: &Booking, reason: Option<&str>, frontend_url: &str) -> String {
    let mut html = String::with_capacity(2048);
    html.push_str(
        "<!DOCTYPE html>\n<html>\n<head>\n<style>\n\
         body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; }\n\
         .container { max-width: 600px; margin: 0 auto; padding: 20px; }\n\
         .header { background: linear-gradient(135deg, #f093fb 0%, #f5576c 100%); color: white; padding: 30px; text-align: center; border-radius: 10px 10px 0 0; }\n\
         .content { background: #f9f9f9; padding: 30px; border-radius: 0 0 10px 10px; }\n\
         .booking-details { background: white; padding: 20px; border-radius: 8px; margin: 20px 0; }\n\
         .reason-box { background: #fff3cd; border-left: 4px solid #ffc107; padding: 15px; margin: 20px 0; border-radius: 4px; }\n\
         .button { display: inline-block; padding: 15px 30px; background: #f5576c; color: white; text-decoration: none; border-radius: 5px; margin: 20px 0; }\n\
         .footer { text-align: center; color: #999; font-size: 12px; margin-top: 30px; }\n\
         </style>\n</head>\n<body>\n<div class=\"container\">\n\
         <div class=\"header\"><h1>Booking Update</h1></div>\n\
         <div class=\"content\">\n",
    );
    html.push_str(&format!("<h2>Dear {},</h2>\n", booking.name));
    html.push_str(
        "<p>Thank you for your interest in dining with us. Unfortunately, we are unable to confirm your booking at this time.</p>\n",
    );
    if let Some(reason) = reason
        && !reason.trim().is_empty()
    {
        html.push_str(&format!(
            "<div class=\"reason-box\"><strong>Reason:</strong><br>{}</div>\n",
            reason
        ));
    }

    html.push_str("<div class=\"booking-details\">\n<h3>Requested Booking Details</h3>\n");
    html.push_str(&format!(
        "<p><strong>Branch:</strong> {}</p>\n",
        booking.branch.display_name()
    ));
    html.push_str(&format!(
        "<p><strong>Date:</strong> {}</p>\n",
        humanize_date(booking.date)
    ));
    html.push_str(&format!("<p><strong>Time:</strong> {}</p>\n", booking.time));
    html.push_str(&format!(
        "<p><strong>Guests:</strong> {} people</p>\n",
        booking.guests
    ));
    html.push_str("</div>\n");

    html.push_str(
        "<p>We would be happy to help you find an alternative date or time. Please feel free to:</p>\n\
         <ul>\n\
         <li>Try a different date or time slot</li>\n\
         <li>Contact us directly for personalized assistance</li>\n\
         <li>Check our available slots online</li>\n\
         </ul>\n",
    );
    html.push_str(&format!(
        "<div style=\"text-align: center;\"><a href=\"{}/booking\" class=\"button\">Make New Booking</a></div>\n",
        frontend_url
    ));
    html.push_str(FOOTER);
    html.push_str("</div>\n</div>\n</body>\n</html>\n");
    html
}

/// Render the cancellation notice (only sent when the notify-on-close
/// toggle is enabled).
pub fn render_cancellation(booking: &Booking) -> String {
    let mut html = String::with_capacity(1024);
    html.push_str(
        "<!DOCTYPE html>\n<html>\n<head>\n<style>\n\
         body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; }\n\
         .container { max-width: 600px; margin: 0 auto; padding: 20px; }\n\
         .footer { text-align: center; color: #999; font-size: 12px; margin-top: 30px; }\n\
         </style>\n</head>\n<body>\n<div class=\"container\">\n<h1>Booking Cancelled</h1>\n",
    );
    html.push_str(&format!("<h2>Dear {},</h2>\n", booking.name));
    html.push_str(&format!(
        "<p>Your booking at {} on {} at {} has been cancelled.</p>\n",
        booking.branch.display_name(),
        humanize_date(booking.date),
        booking.time
    ));
    html.push_str("<p>If this was unexpected, please contact us directly.</p>\n");
    html.push_str(FOOTER);
    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn detail_row(html: &mut String, label: &str, value: &str) {
    html.push_str(&format!(
        "<div class=\"detail-row\"><span class=\"detail-label\">{}:</span><span>{}</span></div>\n",
        label, value
    ));
}
