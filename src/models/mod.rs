pub mod notification;
pub mod profile;
pub mod subscription;

pub use notification::{Notification, NotificationType};
pub use profile::{Profile, ProfileType};
pub use subscription::{
    BillingCycle, CardColor, Category, CreateSubscriptionDto, Subscription, UpdateSubscriptionDto,
};
