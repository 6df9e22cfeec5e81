//! Diesel table definitions for the surcharge store.

#![allow(missing_docs)]

diesel::table! {
    surcharge_record (id) {
        id -> Nullable<Integer>,
        surcharge_type -> Text,
        carrier_code -> Text,
        carrier_name -> Nullable<Text>,
        start_date -> Text,
        end_date -> Text,
        currency -> Text,
        min_charge -> Nullable<Double>,
        over_charge -> Nullable<Double>,
        route -> Text,
        remark -> Nullable<Text>,
        charge_code -> Text,
        created_at -> Text,
    }
}

diesel::table! {
    sync_log (id) {
        id -> Nullable<Integer>,
        sync_date -> Text,
        record_count -> Integer,
        synced_at -> Text,
    }
}

diesel::allow_tables_to_appear_in_same_query!(surcharge_record, sync_log,);
