//! String Tables
//!
//! Static key→string lookup for EN/UZ/RU. No logic beyond fallback: a key
//! missing from the active language falls back to English, then to the key
//! itself. The active language is persisted in `localStorage["lang"]`.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lang {
    #[default]
    En,
    Uz,
    Ru,
}

impl Lang {
    pub const ALL: [Lang; 3] = [Lang::En, Lang::Uz, Lang::Ru];

    pub fn as_str(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Uz => "uz",
            Lang::Ru => "ru",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "en" => Some(Lang::En),
            "uz" => Some(Lang::Uz),
            "ru" => Some(Lang::Ru),
            _ => None,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Uz => "O‘zbekcha",
            Lang::Ru => "Русский",
        }
    }
}

/// Translate `key` for `lang`, falling back to English, then the key itself.
pub fn t(lang: Lang, key: &'static str) -> &'static str {
    lookup(lang, key)
        .or_else(|| lookup(Lang::En, key))
        .unwrap_or(key)
}

fn lookup(lang: Lang, key: &str) -> Option<&'static str> {
    match lang {
        Lang::En => en(key),
        Lang::Uz => uz(key),
        Lang::Ru => ru(key),
    }
}

fn en(key: &str) -> Option<&'static str> {
    Some(match key {
        // NAV
        "nav_dashboard" => "Dashboard",
        "nav_manage" => "Manage Queue",
        "nav_analytics" => "Analytics",
        "nav_logout" => "Logout",
        "nav_back" => "← Back",

        // LOGIN
        "login_title" => "Staff Login",
        "login_subtitle" => "Sign in to manage the queue",
        "login_email" => "Email",
        "login_password" => "Password",
        "login_btn" => "Log In",
        "login_error" => "Invalid login. Please try again.",

        // JOIN
        "join_welcome" => "Welcome",
        "join_prompt" => "Please enter your info to join the queue.",
        "join_name" => "Your name",
        "join_name_ph" => "e.g., Alex",
        "join_party" => "Party size",
        "join_contact" => "Phone or email (optional)",
        "join_contact_ph" => "For notifications",
        "join_btn" => "Join Queue",
        "join_terms" => "By joining, you agree to receive on-site updates. No apps needed.",
        "join_failed" => "Failed to join queue",
        "privacy_title" => "Privacy Notice",
        "privacy_body" => {
            "Your information (name and contact details) is used only for managing your place \
             in line. After your visit, your personal data is anonymized. Anonymous queue \
             activity may be retained for analytics purposes."
        }
        "privacy_accept" => "I Understand & Agree",
        "queue_closed_join" => "This queue is currently closed. You cannot join.",
        "party_limit" => "Party size limit: 6",
        "queue_name_required" => "Queue name is required.",

        // STATUS
        "status_title" => "Queue Status",
        "status_your_number" => "Your number",
        "status_your_position" => "Your Position",
        "status_estimated_wait" => "Estimated Wait",
        "status_leave" => "Leave Queue",
        "status_refresh_btn" => "Refresh Status",
        "status_called_banner" => "You are being called! Please return to the host stand.",
        "status_wait_msg" => "Please wait until your name is called.",
        "status_waiting" => "Waiting",
        "status_called" => "Called",
        "status_served" => "Served",
        "status_left" => "Left",
        "status_total_waiting" => "Total Waiting",
        "enable_sound_alerts" => "Enable Sound Alerts",
        "enable_vibration_alerts" => "Enable Vibration",
        "enable_desktop_notifications" => "Enable Notifications",
        "modal_queue_overview" => "Queue Overview",
        "modal_people_ahead" => "People Ahead",
        "modal_avg_service" => "Avg Service Time",
        "served_screen_msg" => "You have been served. Thanks for visiting!",
        "left_screen_msg" => "You left the queue.",
        "join_again" => "Join Again",
        "missing_ticket_msg" => "Missing ticket info. Please join the queue again.",

        // DASHBOARD
        "dash_title" => "Dashboard",
        "your_queues" => "Your Queues",
        "create_new_queue" => "Create New Queue",
        "new_queue_btn" => "+ New Queue",
        "queue_name_label" => "Queue Name",
        "queue_name_ph" => "e.g., Main Dining",
        "avg_service_label" => "Average Service Time (min)",
        "create_button" => "Create",
        "no_queues_created" => "No queues created yet",
        "empty_create_hint" => "Click the button above to create your first queue.",
        "manage_label" => "Manage",
        "delete_label" => "Delete",
        "status_open" => "Open",
        "status_closed" => "Closed",
        "dash_open_queue" => "Open Queue",
        "dash_close_queue" => "Close Queue",
        "confirm_delete_queue" => "Are you sure you want to delete this queue?",
        "confirm_force_delete" => "This queue has tickets. Force delete?",
        "join_link_label" => "Join link",

        // MANAGE
        "active_tickets" => "Active Tickets",
        "summary_status" => "Status",
        "summary_waiting" => "Waiting",
        "summary_served_today" => "Served Today",
        "table_name" => "Name",
        "table_party" => "Party",
        "table_status" => "Status",
        "table_joined" => "Joined",
        "table_called" => "Called",
        "table_served" => "Served",
        "table_left" => "Left",
        "table_contact" => "Contact",
        "table_actions" => "Actions",
        "open_controls" => "Open Controls",
        "queue_controls" => "Queue Controls",
        "toggle_open_close" => "Toggle Open/Close",
        "custom_message" => "Custom Message",
        "call_next" => "Call Next",
        "call_label" => "Call",
        "serve_label" => "Serve",
        "manage_cancel" => "Cancel",
        "manage_save" => "Save Changes",
        "no_waiting_customers" => "No waiting customers.",
        "no_tickets_yet" => "No tickets yet.",

        // ANALYTICS
        "analytics_title" => "Analytics",
        "date_range_7" => "Last 7 Days",
        "date_range_14" => "Last 14 Days",
        "date_range_30" => "Last 30 Days",
        "date_range_custom" => "Custom Range",
        "apply_button" => "Apply",
        "select_date_prompt" => "Please select a start and end date.",
        "live_refresh_label" => "Enable Live Refresh (Every 10 Seconds)",
        "total_tickets" => "Total Tickets",
        "served" => "Served",
        "total_queues" => "Total Queues",
        "served_left_trend" => "Served/Left Trend",
        "avg_wait_time" => "Avg Wait Time",
        "peak_day_of_week" => "Peak Day of Week",
        "heatmap_peak_hours" => "Heatmap: Peak Hours",
        "heatmap_legend" => "Darker colors = higher volume",
        "chart_label_served" => "Served",
        "chart_label_left" => "Left Queue",
        "chart_label_avg_wait" => "Avg Wait (min)",
        "chart_label_customers" => "Customers",
        "compare_queues" => "Compare Queues",
        "compare_queue_a" => "Queue A",
        "compare_queue_b" => "Queue B",

        _ => return None,
    })
}

fn uz(key: &str) -> Option<&'static str> {
    Some(match key {
        // NAV
        "nav_dashboard" => "Panel",
        "nav_manage" => "Navbatni boshqarish",
        "nav_analytics" => "Analitika",
        "nav_logout" => "Chiqish",
        "nav_back" => "← Orqaga",

        // LOGIN
        "login_title" => "Xodimlar kirishi",
        "login_subtitle" => "Navbatni boshqarish uchun tizimga kiring",
        "login_email" => "Email",
        "login_password" => "Parol",
        "login_btn" => "Kirish",
        "login_error" => "Login noto‘g‘ri. Qayta urinib ko‘ring.",

        // JOIN
        "join_welcome" => "Xush kelibsiz",
        "join_prompt" => "Navbatga qo‘shilish uchun ma’lumotlaringizni kiriting.",
        "join_name" => "Ismingiz",
        "join_name_ph" => "masalan, Ali",
        "join_party" => "Guruh soni",
        "join_contact" => "Telefon yoki email (ixtiyoriy)",
        "join_contact_ph" => "Bildirishnomalar uchun",
        "join_btn" => "Navbatga qo‘shilish",
        "join_terms" => {
            "Qo‘shilish orqali joyidagi yangilanishlarni qabul qilishga rozilik bildirasiz. \
             Ilova kerak emas."
        }
        "join_failed" => "Navbatga qo‘shilib bo‘lmadi",
        "privacy_title" => "Maxfiylik eslatmasi",
        "privacy_body" => {
            "Ma’lumotlaringiz (ism va aloqa) faqat navbatdagi o‘rningizni boshqarish uchun \
             ishlatiladi. Tashrifdan so‘ng shaxsiy ma’lumotlar anonimlashtiriladi. Anonim \
             navbat faolligi analitika uchun saqlanishi mumkin."
        }
        "privacy_accept" => "Tushundim va roziman",
        "queue_closed_join" => "Bu navbat hozir yopiq. Qo‘shila olmaysiz.",
        "party_limit" => "Guruh soni chegarasi: 6",
        "queue_name_required" => "Navbat nomi talab qilinadi.",

        // STATUS
        "status_title" => "Navbat holati",
        "status_your_number" => "Sizning raqamingiz",
        "status_your_position" => "Sizning o‘rningiz",
        "status_estimated_wait" => "Taxminiy kutish",
        "status_leave" => "Navbatdan chiqish",
        "status_refresh_btn" => "Holatni yangilash",
        "status_called_banner" => "Sizni chaqirishyapti! Iltimos, qaytib keling.",
        "status_wait_msg" => "Ismingiz chaqirilguncha kuting.",
        "status_waiting" => "Kutmoqda",
        "status_called" => "Chaqirildi",
        "status_served" => "Xizmat qilingan",
        "status_left" => "Chiqib ketdi",
        "status_total_waiting" => "Jami kutayotganlar",
        "enable_sound_alerts" => "Tovushli ogohlantirishlarni yoqish",
        "enable_vibration_alerts" => "Tebranishni yoqish",
        "enable_desktop_notifications" => "Bildirishnomalarni yoqish",
        "modal_queue_overview" => "Navbat ko‘rinishi",
        "modal_people_ahead" => "Oldingizdagi odamlar",
        "modal_avg_service" => "O‘rtacha xizmat vaqti",
        "served_screen_msg" => "Sizga xizmat ko‘rsatildi. Tashrifingiz uchun rahmat!",
        "left_screen_msg" => "Siz navbatdan chiqdingiz.",
        "join_again" => "Qayta qo‘shilish",
        "missing_ticket_msg" => "Chipta ma’lumoti topilmadi. Iltimos, navbatga qayta qo‘shiling.",

        // DASHBOARD
        "dash_title" => "Panel",
        "your_queues" => "Sizning navbatlaringiz",
        "create_new_queue" => "Yangi navbat yaratish",
        "new_queue_btn" => "+ Yangi navbat",
        "queue_name_label" => "Navbat nomi",
        "queue_name_ph" => "masalan, Main Dining",
        "avg_service_label" => "O‘rtacha xizmat vaqti (daq)",
        "create_button" => "Yaratish",
        "no_queues_created" => "Hozirgacha navbatlar yaratilmagan",
        "empty_create_hint" => "Yuqoridagi tugmani bosib birinchi navbatni yarating.",
        "manage_label" => "Boshqarish",
        "delete_label" => "O‘chirish",
        "status_open" => "Ochilgan",
        "status_closed" => "Yopilgan",
        "dash_open_queue" => "Navbatni ochish",
        "dash_close_queue" => "Navbatni yopish",
        "confirm_delete_queue" => "Ushbu navbatni o‘chirishni xohlaysizmi?",
        "confirm_force_delete" => "Bu navbatda chiptalar mavjud. Majburiy o‘chirish?",
        "join_link_label" => "Qo‘shilish havolasi",

        // MANAGE
        "active_tickets" => "Faol chiptalar",
        "summary_status" => "Holat",
        "summary_waiting" => "Kutmoqda",
        "summary_served_today" => "Bugun xizmat qilingan",
        "table_name" => "Ism",
        "table_party" => "Guruh",
        "table_status" => "Holat",
        "table_joined" => "Qo‘shildi",
        "table_called" => "Chaqirilgan",
        "table_served" => "Xizmat qilingan",
        "table_left" => "Ketdi",
        "table_contact" => "Aloqa",
        "table_actions" => "Harakatlar",
        "open_controls" => "Boshqaruvni ochish",
        "queue_controls" => "Navbat boshqaruvi",
        "toggle_open_close" => "Ochish/Yopish",
        "custom_message" => "Maxsus xabar",
        "call_next" => "Keyingisini chaqirish",
        "call_label" => "Chaqirish",
        "serve_label" => "Xizmat qilish",
        "manage_cancel" => "Bekor qilish",
        "manage_save" => "O‘zgarishlarni saqlash",
        "no_waiting_customers" => "Kutayotgan mijozlar yo‘q.",
        "no_tickets_yet" => "Hozircha chiptalar yo‘q.",

        // ANALYTICS
        "analytics_title" => "Analitika",
        "date_range_7" => "So‘nggi 7 kun",
        "date_range_14" => "So‘nggi 14 kun",
        "date_range_30" => "So‘nggi 30 kun",
        "date_range_custom" => "Maxsus oraliq",
        "apply_button" => "Qo‘llash",
        "select_date_prompt" => "Boshlanish va tugash sanasini tanlang.",
        "live_refresh_label" => "Jonli yangilashni yoqish (har 10 soniyada)",
        "total_tickets" => "Jami chiptalar",
        "served" => "Xizmat qilingan",
        "total_queues" => "Jami navbatlar",
        "served_left_trend" => "Xizmat qilingan / Chiqdi trendlari",
        "avg_wait_time" => "O‘rtacha kutish vaqti",
        "peak_day_of_week" => "Haftaning eng band kuni",
        "heatmap_peak_hours" => "Issiqlik xaritasi: Eng band soatlar",
        "heatmap_legend" => "Qorong‘i ranglar = yuqori hajm",
        "chart_label_served" => "Xizmat qilingan",
        "chart_label_left" => "Navbatdan chiqdi",
        "chart_label_avg_wait" => "O‘rtacha kutish (daq)",
        "chart_label_customers" => "Mijozlar",
        "compare_queues" => "Navbatlarni solishtirish",
        "compare_queue_a" => "Navbat A",
        "compare_queue_b" => "Navbat B",

        _ => return None,
    })
}

fn ru(key: &str) -> Option<&'static str> {
    Some(match key {
        // NAV
        "nav_dashboard" => "Панель",
        "nav_manage" => "Управление очередью",
        "nav_analytics" => "Аналитика",
        "nav_logout" => "Выйти",
        "nav_back" => "← Назад",

        // LOGIN
        "login_title" => "Вход для сотрудников",
        "login_subtitle" => "Войдите, чтобы управлять очередью",
        "login_email" => "Email",
        "login_password" => "Пароль",
        "login_btn" => "Войти",
        "login_error" => "Неверный вход. Пожалуйста, попробуйте ещё раз.",

        // JOIN
        "join_welcome" => "Добро пожаловать",
        "join_prompt" => "Введите данные, чтобы встать в очередь.",
        "join_name" => "Ваше имя",
        "join_name_ph" => "например, Alex",
        "join_party" => "Размер группы",
        "join_contact" => "Телефон или email (необязательно)",
        "join_contact_ph" => "Для уведомлений",
        "join_btn" => "Встать в очередь",
        "join_terms" => {
            "Присоединяясь, вы соглашаетесь получать обновления на месте. Приложение не нужно."
        }
        "join_failed" => "Не удалось встать в очередь",
        "privacy_title" => "Уведомление о конфиденциальности",
        "privacy_body" => {
            "Ваша информация (имя и контакты) используется только для управления вашим местом \
             в очереди. После визита персональные данные обезличиваются. Анонимная активность \
             очереди может сохраняться для аналитики."
        }
        "privacy_accept" => "Понятно, согласен(на)",
        "queue_closed_join" => "Эта очередь сейчас закрыта. Присоединиться нельзя.",
        "party_limit" => "Максимальный размер группы: 6",
        "queue_name_required" => "Требуется имя очереди.",

        // STATUS
        "status_title" => "Статус очереди",
        "status_your_number" => "Ваш номер",
        "status_your_position" => "Ваше место",
        "status_estimated_wait" => "Ожидаемое время",
        "status_leave" => "Покинуть очередь",
        "status_refresh_btn" => "Обновить статус",
        "status_called_banner" => "Вас вызывают! Пожалуйста, вернитесь к стойке.",
        "status_wait_msg" => "Пожалуйста, ждите, пока не позовут ваше имя.",
        "status_waiting" => "Ожидает",
        "status_called" => "Позвали",
        "status_served" => "Обслужено",
        "status_left" => "Ушёл",
        "status_total_waiting" => "Всего ожидающих",
        "enable_sound_alerts" => "Включить звуковые уведомления",
        "enable_vibration_alerts" => "Включить вибрацию",
        "enable_desktop_notifications" => "Включить уведомления",
        "modal_queue_overview" => "Обзор очереди",
        "modal_people_ahead" => "Людей впереди",
        "modal_avg_service" => "Среднее время обслуживания",
        "served_screen_msg" => "Вас обслужили. Спасибо за визит!",
        "left_screen_msg" => "Вы покинули очередь.",
        "join_again" => "Встать снова",
        "missing_ticket_msg" => "Данные билета не найдены. Пожалуйста, встаньте в очередь снова.",

        // DASHBOARD
        "dash_title" => "Панель",
        "your_queues" => "Ваши очереди",
        "create_new_queue" => "Создать новую очередь",
        "new_queue_btn" => "+ Новая очередь",
        "queue_name_label" => "Название очереди",
        "queue_name_ph" => "напр., Main Dining",
        "avg_service_label" => "Среднее время обслуживания (мин)",
        "create_button" => "Создать",
        "no_queues_created" => "Очереди ещё не созданы",
        "empty_create_hint" => "Нажмите кнопку выше, чтобы создать первую очередь.",
        "manage_label" => "Управлять",
        "delete_label" => "Удалить",
        "status_open" => "Открыта",
        "status_closed" => "Закрыта",
        "dash_open_queue" => "Открыть очередь",
        "dash_close_queue" => "Закрыть очередь",
        "confirm_delete_queue" => "Вы уверены, что хотите удалить эту очередь?",
        "confirm_force_delete" => "В этой очереди есть билеты. Принудительно удалить?",
        "join_link_label" => "Ссылка для входа",

        // MANAGE
        "active_tickets" => "Активные билеты",
        "summary_status" => "Статус",
        "summary_waiting" => "В очереди",
        "summary_served_today" => "Обслужено сегодня",
        "table_name" => "Имя",
        "table_party" => "Группа",
        "table_status" => "Статус",
        "table_joined" => "Вступил",
        "table_called" => "Вызывался",
        "table_served" => "Обслужен",
        "table_left" => "Ушёл",
        "table_contact" => "Контакт",
        "table_actions" => "Действия",
        "open_controls" => "Открыть управление",
        "queue_controls" => "Управление очередью",
        "toggle_open_close" => "Переключить Открыть/Закрыть",
        "custom_message" => "Пользовательское сообщение",
        "call_next" => "Позвать следующего",
        "call_label" => "Позвать",
        "serve_label" => "Обслужить",
        "manage_cancel" => "Отмена",
        "manage_save" => "Сохранить изменения",
        "no_waiting_customers" => "Нет ожидающих клиентов.",
        "no_tickets_yet" => "Билетов пока нет.",

        // ANALYTICS
        "analytics_title" => "Аналитика",
        "date_range_7" => "Последние 7 дней",
        "date_range_14" => "Последние 14 дней",
        "date_range_30" => "Последние 30 дней",
        "date_range_custom" => "Пользовательский диапазон",
        "apply_button" => "Применить",
        "select_date_prompt" => "Выберите начальную и конечную дату.",
        "live_refresh_label" => "Включить автообновление (каждые 10 секунд)",
        "total_tickets" => "Всего билетов",
        "served" => "Обслужено",
        "total_queues" => "Всего очередей",
        "served_left_trend" => "Тренд: обслужено/ушло",
        "avg_wait_time" => "Среднее время ожидания",
        "peak_day_of_week" => "Пик по дням недели",
        "heatmap_peak_hours" => "Тепловая карта: пиковые часы",
        "heatmap_legend" => "Тёмные цвета = большая посещаемость",
        "chart_label_served" => "Обслужено",
        "chart_label_left" => "Покинул очередь",
        "chart_label_avg_wait" => "Ср. ожидание (мин)",
        "chart_label_customers" => "Клиенты",
        "compare_queues" => "Сравнить очереди",
        "compare_queue_a" => "Очередь A",
        "compare_queue_b" => "Очередь B",

        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_in_each_language() {
        assert_eq!(t(Lang::En, "join_btn"), "Join Queue");
        assert_eq!(t(Lang::Uz, "join_btn"), "Navbatga qo‘shilish");
        assert_eq!(t(Lang::Ru, "join_btn"), "Встать в очередь");
    }

    #[test]
    fn unknown_key_falls_back_to_itself() {
        assert_eq!(t(Lang::Ru, "no_such_key"), "no_such_key");
    }

    #[test]
    fn lang_codes_round_trip() {
        for lang in Lang::ALL {
            assert_eq!(Lang::from_str(lang.as_str()), Some(lang));
        }
        assert_eq!(Lang::from_str("de"), None);
    }

    #[test]
    fn status_pill_labels_exist_in_every_language() {
        use crate::model::TicketStatus;
        for status in [
            TicketStatus::Waiting,
            TicketStatus::Called,
            TicketStatus::Served,
            TicketStatus::Left,
        ] {
            for lang in Lang::ALL {
                let label = t(lang, status.label_key());
                assert_ne!(label, status.label_key());
            }
        }
    }
}
