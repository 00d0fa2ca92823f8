//! Seed data the dashboard ships with

use crate::chart::spec::DonutSegment;
use crate::core::order::{OrderRecord, OrderStatus, OrderUser};
use crate::panel::{PanelFeed, PanelItem};
use chrono::{DateTime, Duration, FixedOffset, SecondsFormat, Utc};

enum SeedDate {
    Ago(Duration),
    Fixed(&'static str),
}

struct SeedOrder {
    user: &'static str,
    avatar: &'static str,
    project: &'static str,
    address: &'static str,
    date: SeedDate,
    status: OrderStatus,
}

#[rustfmt::skip]
fn seed_table() -> [SeedOrder; 15] {
    use OrderStatus::*;
    use SeedDate::*;

    [
        SeedOrder { user: "Natali Craig", avatar: "avatar-female15.png", project: "Landing Page", address: "Meadow Lane Oakland", date: Ago(Duration::seconds(15)), status: InProgress },
        SeedOrder { user: "Kate Morrison", avatar: "avatar-female09.png", project: "CRM Admin pages", address: "Larry San Francisco", date: Ago(Duration::minutes(1)), status: Complete },
        SeedOrder { user: "Drew Cano", avatar: "avatar-male08.png", project: "Client Project", address: "Bagwell Avenue Ocala", date: Ago(Duration::minutes(5)), status: Pending },
        SeedOrder { user: "Orlando Diggs", avatar: "avatar-male06.png", project: "Admin Dashboard", address: "Washburn Baton Rouge", date: Ago(Duration::minutes(15)), status: Approved },
        SeedOrder { user: "Andi Lane", avatar: "avatar-female08.png", project: "App Landing Page", address: "Nest Lane Olivette", date: Ago(Duration::hours(1)), status: Rejected },
        SeedOrder { user: "Tom Wilson", avatar: "avatar-male11.png", project: "E-commerce Site", address: "Broadway New York", date: Ago(Duration::hours(3)), status: InProgress },
        SeedOrder { user: "Sarah Davis", avatar: "avatar-female05.png", project: "Mobile Banking App", address: "Pine Street Seattle", date: Ago(Duration::hours(8)), status: Complete },
        SeedOrder { user: "Mike Johnson", avatar: "avatar-3d05.png", project: "Dashboard Redesign", address: "Market Street Denver", date: Ago(Duration::hours(24)), status: Pending },
        SeedOrder { user: "Emily Chen", avatar: "avatar-3d03.png", project: "API Integration", address: "Oak Avenue Chicago", date: Ago(Duration::hours(30)), status: Approved },
        SeedOrder { user: "Alex Rodriguez", avatar: "avatar-male07.png", project: "Data Analytics Platform", address: "Cedar Avenue Portland", date: Fixed("2024-09-19T14:30:00Z"), status: Complete },
        SeedOrder { user: "Lisa Thompson", avatar: "avatar-female09.png", project: "Customer Portal", address: "Elm Street Austin", date: Fixed("2024-09-15T10:15:00Z"), status: InProgress },
        SeedOrder { user: "James Wilson", avatar: "avatar-3d08.png", project: "Payment Gateway", address: "Maple Drive Boston", date: Fixed("2024-08-15T16:45:00Z"), status: Rejected },
        SeedOrder { user: "Anna Garcia", avatar: "avatar-female15.png", project: "Content Management System", address: "River Road Phoenix", date: Fixed("2024-07-22T09:30:00Z"), status: Complete },
        SeedOrder { user: "Robert Kim", avatar: "avatar-male06.png", project: "Inventory System", address: "Lake View Miami", date: Fixed("2023-12-10T11:20:00Z"), status: Approved },
        SeedOrder { user: "Jessica Brown", avatar: "avatar-female08.png", project: "Social Media App", address: "Harbor Street San Diego", date: Fixed("2023-06-05T14:10:00Z"), status: Complete },
    ]
}

/// The fifteen seeded orders `#CM9801` to `#CM9815`
///
/// The first nine are dated relative to `now` (15 seconds up to 30 hours
/// ago); the rest carry fixed timestamps.
pub fn seed_orders(now: DateTime<FixedOffset>) -> Vec<OrderRecord> {
    seed_table()
        .into_iter()
        .enumerate()
        .map(|(i, seed)| {
            let n = i + 1;
            let date = match seed.date {
                SeedDate::Ago(ago) => (now - ago)
                    .with_timezone(&Utc)
                    .to_rfc3339_opts(SecondsFormat::Millis, true),
                SeedDate::Fixed(iso) => iso.to_string(),
            };
            OrderRecord {
                id: n.to_string(),
                order_id: format!("#CM98{:02}", n),
                user: OrderUser {
                    name: seed.user.to_string(),
                    avatar: format!("/assets/avatars/{}", seed.avatar),
                },
                project: seed.project.to_string(),
                address: seed.address.to_string(),
                date,
                status: seed.status,
            }
        })
        .collect()
}

/// The "Total Sales" breakdown shown in the donut chart
pub fn sales_segments() -> Vec<DonutSegment> {
    vec![
        DonutSegment::new("Direct", 38.6, "#1C1C1C"),
        DonutSegment::new("Affiliate", 22.5, "#BAEDBD"),
        DonutSegment::new("Sponsored", 30.8, "#95A4FC"),
        DonutSegment::new("E-mail", 8.1, "#B1E3FF"),
    ]
}

/// Right panel contents: notifications, recent activity and contacts
///
/// Contacts 1, 2 and 4 start online.
#[rustfmt::skip]
pub fn seed_panel_feed() -> PanelFeed {
    const ICONS: &str = "/assets/icons";
    const AVATARS: &str = "/assets/avatars";

    let notifications = [
        (1, "bug-beetle.svg", "#E3F5FF", "You have a bug that needs to be fixed.", "Just now"),
        (2, "user.svg", "#E5ECF6", "New user registered", "59 minutes ago"),
        (3, "bug-beetle.svg", "#E3F5FF", "You have a bug that needs to be fixed.", "12 hours ago"),
        (4, "broadcast.svg", "#E5ECF6", "Andi Lane subscribed to you", "Today, 11:59 AM"),
    ];
    let activities = [
        (1, "avatar-3d05.png", "You have a bug that needs to be fixed.", "Just now"),
        (2, "avatar-female05.png", "Released a new version", "59 minutes ago"),
        (3, "avatar-3d08.png", "Submitted a bug", "12 hours ago"),
        (4, "avatar-male07.png", "Modified A data in Page X", "Today, 11:59 AM"),
        (5, "avatar-male11.png", "Deleted a page in Project X", "Feb 2, 2023"),
    ];
    let contacts = [
        (1, "avatar-female15.png", "Natali Craig"),
        (2, "avatar-male08.png", "Drew Cano"),
        (3, "avatar-male06.png", "Orlando Diggs"),
        (4, "avatar-female08.png", "Andi Lane"),
        (5, "avatar-female09.png", "Kate Morrison"),
        (6, "avatar-3d03.png", "Koray Okumus"),
    ];

    let items = notifications
        .into_iter()
        .map(|(id, icon, bg, title, time)| PanelItem::notification(id, format!("{ICONS}/{icon}"), bg, title, time))
        .chain(activities.into_iter().map(|(id, avatar, title, time)| PanelItem::activity(id, format!("{AVATARS}/{avatar}"), title, time)))
        .chain(contacts.into_iter().map(|(id, avatar, name)| PanelItem::contact(id, format!("{AVATARS}/{avatar}"), name)))
        .collect();

    PanelFeed::new(items).with_online_contacts([1, 2, 4])
}
