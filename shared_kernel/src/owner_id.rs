crate::uuid_key!(OwnerId);
